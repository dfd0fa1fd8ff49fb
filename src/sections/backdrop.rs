use leptos::prelude::*;

/// Fixed gradient blobs behind the page. Pointer-inert; the pulse animation
/// lives in CSS.
#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="backdrop">
            <div class="blob blob-top"></div>
            <div class="blob blob-right"></div>
            <div class="blob blob-bottom"></div>
        </div>
    }
}
