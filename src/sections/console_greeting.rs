//! Console branding for anyone who opens devtools.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::EVENT_DATES;

#[component]
pub fn ConsoleGreeting() -> impl IntoView {
    Effect::new(move || greet());
    view! {}
}

fn greet() {
    web_sys::console::log_2(
        &JsValue::from_str("%cSinX × Dubai AI Festival"),
        &JsValue::from_str("color: #a855f7; font-weight: bold; font-size: 14px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{EVENT_DATES} — thanks for stopping by the booth.")),
        &JsValue::from_str("color: #888;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cFound a bug on this page? feedback@sinxsolutions.ai"),
        &JsValue::from_str("color: #666; font-size: 10px;"),
    );
}
