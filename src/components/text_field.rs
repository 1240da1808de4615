//! Text Field Component
//!
//! Labeled text input with an inline helper/error line.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Controlled text input bound to one form field
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="text-field">
            <label class="field-label">{label}</label>
            <input
                type="text"
                class=move || if error.get().is_some() { "field-input invalid" } else { "field-input" }
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    on_input.run(input.value());
                }
            />
            <span class="field-helper">{move || error.get().unwrap_or_default()}</span>
        </div>
    }
}
