//! Auto-advancing photo rotation for the hero.
//!
//! Every slide stays in the DOM; only opacity and pointer-events flip, so the
//! 0.8s CSS transition on `.slide` gives the crossfade. The interval handle
//! is owned by this component instance and cleared on unmount.

use std::time::Duration;

use leptos::prelude::*;

use crate::slides::Deck;

/// Cadence of the automatic advance. A manual dot click does not reset it;
/// the next tick steps forward from whatever slide the user picked.
const ADVANCE_INTERVAL: Duration = Duration::from_millis(3500);

#[component]
pub fn Slideshow(images: &'static [&'static str]) -> impl IntoView {
    let deck = match Deck::new(images.len()) {
        Ok(deck) => RwSignal::new(deck),
        // Nothing to rotate; render an empty region instead of panicking.
        Err(_) => return ().into_any(),
    };

    // set_interval_with_handle only fails outside a browser event loop.
    if let Ok(handle) =
        set_interval_with_handle(move || deck.update(|d| d.advance()), ADVANCE_INTERVAL)
    {
        on_cleanup(move || handle.clear());
    }

    view! {
        <div class="slideshow">
            {images
                .iter()
                .enumerate()
                .map(|(i, src)| {
                    let src = *src;
                    view! {
                        <div
                            class="slide"
                            style:opacity=move || {
                                if deck.get().active() == i { "1" } else { "0" }
                            }
                            style:pointer-events=move || {
                                if deck.get().active() == i { "auto" } else { "none" }
                            }
                        >
                            <img
                                src=src
                                alt=format!("Event highlight {}", i + 1)
                                loading={if i == 0 { "eager" } else { "lazy" }}
                            />
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <div class="slide-dots">
                {(0..images.len())
                    .map(|i| {
                        view! {
                            <button
                                class=move || {
                                    if deck.get().active() == i {
                                        "slide-dot active"
                                    } else {
                                        "slide-dot"
                                    }
                                }
                                aria-label=format!("Go to slide {}", i + 1)
                                on:click=move |_| deck.update(|d| d.select(i))
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_any()
}
