use leptos::prelude::*;

#[component]
pub fn Icymi() -> impl IntoView {
    view! {
        <section id="icymi" class="section icymi">
            <h2 class="section-title">"ICYMI"</h2>
            <div class="icymi-card">
                <h3 class="icymi-heading">"Press Release"</h3>
                <a href="#" class="icymi-link">
                    "Read More"
                    <span class="arrow">"→"</span>
                </a>
            </div>
        </section>
    }
}
