use leptos::prelude::*;

// Both embeds point at the festival announcement for now; swap the second
// URN once the recap post is published.
const LINKEDIN_EMBEDS: &[&str] = &[
    "https://www.linkedin.com/embed/feed/update/urn:li:activity:7321672216729829377",
    "https://www.linkedin.com/embed/feed/update/urn:li:activity:7321672216729829377",
];

#[component]
pub fn Social() -> impl IntoView {
    view! {
        <section class="section social">
            <h2 class="section-title">"From Our Social Media"</h2>
            <div class="social-row">
                {LINKEDIN_EMBEDS
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <iframe
                                src=*src
                                title=format!("LinkedIn post {}", i + 1)
                                class="social-embed"
                                height="500"
                                frameborder="0"
                                allowfullscreen="true"
                            ></iframe>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
