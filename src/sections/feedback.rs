use leptos::prelude::*;

const FEEDBACK_INBOX: &str = "feedback@sinxsolutions.ai";

const PRODUCT_OPTIONS: &[&str] = &[
    "Bundlr",
    "Sinx Solutions",
    "Knowtice AI",
    "Career Growth AI",
];

/// Feedback form. There is no backend; submit hands the message off to the
/// visitor's mail client via a `mailto:` URL.
#[component]
pub fn Feedback() -> impl IntoView {
    let (product, set_product) = signal(PRODUCT_OPTIONS[0].to_string());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(window) = web_sys::window() {
            let subject =
                js_sys::encode_uri_component(&format!("{} feedback", product.get()));
            let body = js_sys::encode_uri_component(&format!(
                "{}\n\nReply to: {}",
                message.get(),
                email.get()
            ));
            let href = format!("mailto:{FEEDBACK_INBOX}?subject={subject}&body={body}");
            let _ = window.location().set_href(&href);
        }
    };

    view! {
        <section id="feedback" class="section feedback">
            <h2 class="section-title">"Share Your Feedback"</h2>
            <form class="feedback-form" on:submit=submit>
                <label class="form-label" for="feedback-product">
                    "Which product is this feedback for?"
                </label>
                <select
                    id="feedback-product"
                    class="form-field"
                    on:change=move |ev| set_product.set(event_target_value(&ev))
                >
                    {PRODUCT_OPTIONS
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <option
                                    value=option
                                    selected=move || product.get() == option
                                >
                                    {option}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    type="email"
                    class="form-field"
                    placeholder="Your Email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <textarea
                    class="form-field"
                    placeholder="Your Message"
                    rows="4"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="form-submit">
                    "Submit Feedback"
                </button>
            </form>
        </section>
    }
}
