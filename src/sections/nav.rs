use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <img src="assets/SinX.svg" alt="SinX" class="nav-logo" />
                    <span class="nav-title">"SinX"</span>
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    <a href="#products" class="nav-link" on:click=close_menu>"Products"</a>
                    <a href="#icymi" class="nav-link" on:click=close_menu>"ICYMI"</a>
                    <a href="#whats-next" class="nav-link" on:click=close_menu>"What's Next"</a>
                    <a href="#feedback" class="nav-link" on:click=close_menu>"Feedback"</a>
                </div>
            </div>
        </nav>
    }
}
