// SinX at Dubai AI Festival 2025 — event recap page

mod sections;
mod slides;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ConsoleGreeting />
        <Backdrop />
        <Nav />
        <main>
            <Hero />
            <Products />
            <Social />
            <Icymi />
            <WhatsNext />
            <Feedback />
        </main>
        <Footer />
    }
}
