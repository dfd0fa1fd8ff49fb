use leptos::prelude::*;

use super::EVENT_DATES;
use super::slideshow::Slideshow;

/// Photos rotated by the hero slideshow, in cycle order.
const EVENT_IMAGES: &[&str] = &[
    "assets/IMG_7912.JPG",
    "assets/IMG-20250425-WA0117.jpg",
    "assets/IMG_7914.JPG",
    "assets/IMG_7913.JPG",
];

#[component]
pub fn Hero() -> impl IntoView {
    let dates_line = format!("{EVENT_DATES} | A Celebration of AI Innovation");
    view! {
        <section class="hero">
            <h1 class="hero-title">"SinX at Dubai AI Festival"</h1>
            <p class="hero-dates">{dates_line}</p>
            <div class="hero-frame">
                <Slideshow images=EVENT_IMAGES />
            </div>
        </section>
    }
}
