//! Checkbox Group Component
//!
//! Renders the interest records as a checkbox list. On every toggle the
//! group emits the complete current selection through `on_change`, never a
//! diff; the sync controller relies on that contract.

use leptos::prelude::*;

use crate::models::{InterestOption, InterestToggle};

/// Checkbox list bound to the interests field
#[component]
pub fn CheckboxGroup(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<InterestOption>>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<Vec<InterestToggle>>,
) -> impl IntoView {
    // Full selection with one entry flipped, in render order
    let toggled = move |id: &str| -> Vec<InterestToggle> {
        options
            .get()
            .into_iter()
            .map(|opt| {
                let checked = if opt.id == id { !opt.checked } else { opt.checked };
                InterestToggle {
                    id: opt.id,
                    label: Some(opt.label),
                    checked: Some(checked),
                }
            })
            .collect()
    };

    view! {
        <fieldset class="checkbox-group">
            <legend class="field-label">{label}</legend>
            <For
                each=move || options.get()
                key=|opt| (opt.id.clone(), opt.checked)
                children=move |opt| {
                    let id = opt.id.clone();
                    view! {
                        <label class="checkbox-row">
                            <input
                                type="checkbox"
                                checked=opt.checked
                                on:change=move |_| on_change.run(toggled(&id))
                            />
                            <span>{opt.label.clone()}</span>
                        </label>
                    }
                }
            />
            <span class="field-helper">{move || error.get().unwrap_or_default()}</span>
        </fieldset>
    }
}
