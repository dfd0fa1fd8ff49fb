use leptos::prelude::*;

#[component]
pub fn WhatsNext() -> impl IntoView {
    view! {
        <section id="whats-next" class="section whats-next">
            <h2 class="section-title">"What's Next for SinX"</h2>
            <p class="section-description">
                "We're just getting started! SinX is committed to pushing the "
                "boundaries of AI innovation. Stay tuned for new product launches, "
                "partnerships, and opportunities to collaborate with us as we shape "
                "the future of intelligent solutions."
            </p>
        </section>
    }
}
