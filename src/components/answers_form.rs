//! Form View
//!
//! The answers form: three text fields and the interest checkboxes, bound
//! to validated, controlled form state. Submission is gated on overall
//! validity with at most one request in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::adapter;
use crate::components::{CheckboxGroup, TextField};
use crate::form::{AnswersForm, SubmitPhase};
use crate::interests::InterestsSync;
use crate::models::{AnswersSnapshot, InterestToggle, WireOption};
use crate::store::{use_app_store, AppStateStoreFields};

/// Answers form view
#[component]
pub fn FormView() -> impl IntoView {
    let store = use_app_store();

    // Seed the sync controller and the form's interests field from one
    // conversion of the stored snapshot; both sides start from the same
    // records.
    let answers = adapter::get_answers(&store);
    let initial = match AnswersForm::from_snapshot(&answers) {
        Ok(form) => form,
        Err(err) => {
            console::warn_1(
                &format!("stored interests are malformed, starting empty: {err}").into(),
            );
            AnswersForm::from_snapshot(&AnswersSnapshot {
                interests: Vec::new(),
                ..answers
            })
            .expect("snapshot without interests always converts")
        }
    };
    let (sync, set_sync) = signal(InterestsSync::from_records(initial.interests().to_vec()));
    let (form, set_form) = signal(initial);

    // Refresh the checkbox list when the stored interests change out from
    // under the form. The mount value already seeded the form above.
    Effect::new(move |prev: Option<Vec<WireOption>>| {
        let interests = store.answers().get().interests;
        if let Some(prev) = prev {
            if prev != interests {
                set_sync.update(|sync| match sync.on_external_change(&interests) {
                    Ok(records) => {
                        let records = records.to_vec();
                        set_form.update(|form| form.set_interests(records));
                    }
                    Err(err) => {
                        console::warn_1(
                            &format!("ignoring malformed interests update: {err}").into(),
                        );
                    }
                });
            }
        }
        interests
    });

    // Checkbox group reports the complete selection; republish it to the
    // form so the field value stays in lock step with the rendered list.
    let on_interests_change = Callback::new(move |partials: Vec<InterestToggle>| {
        set_sync.update(|sync| {
            let records = sync.on_user_toggle(partials).to_vec();
            set_form.update(|form| form.set_interests(records));
        });
    });

    let on_submit = move |_: web_sys::MouseEvent| {
        let Some(payload) = set_form.try_update(|form| form.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = adapter::update_answers(&store, payload).await;
            set_form.update(|form| form.finish_submit(outcome));
        });
    };

    let name_value = Memo::new(move |_| form.with(|f| f.name().to_string()));
    let age_value = Memo::new(move |_| form.with(|f| f.age().to_string()));
    let mail_value = Memo::new(move |_| form.with(|f| f.mail().to_string()));
    let name_error = Memo::new(move |_| form.with(|f| f.name_state().message()));
    let age_error = Memo::new(move |_| form.with(|f| f.age_state().message()));
    let mail_error = Memo::new(move |_| form.with(|f| f.mail_state().message()));
    let interests_error = Memo::new(move |_| form.with(|f| f.interests_state().message()));
    let interest_options = Memo::new(move |_| sync.with(|s| s.records().to_vec()));
    let submitting = Memo::new(move |_| form.with(|f| f.is_submitting()));
    let submit_disabled = Memo::new(move |_| form.with(|f| !f.is_valid() || f.is_submitting()));
    let submit_error = Memo::new(move |_| {
        form.with(|f| match f.phase() {
            SubmitPhase::Failed(message) => Some(format!("Update failed: {message}")),
            _ => None,
        })
    });

    view! {
        <div class="form-view">
            <TextField
                label="Name"
                value=name_value
                error=name_error
                on_input=Callback::new(move |value| set_form.update(|f| f.set_name(value)))
            />
            <TextField
                label="Age"
                value=age_value
                error=age_error
                on_input=Callback::new(move |value| set_form.update(|f| f.set_age(value)))
            />
            <TextField
                label="Email"
                value=mail_value
                error=mail_error
                on_input=Callback::new(move |value| set_form.update(|f| f.set_mail(value)))
            />
            <CheckboxGroup
                label="Interests"
                options=interest_options
                error=interests_error
                on_change=on_interests_change
            />
            <div class="submit-row">
                <button
                    class="submit-btn"
                    disabled=move || submit_disabled.get()
                    on:click=on_submit
                >
                    "Submit"
                </button>
                {move || submitting.get().then(|| view! { <span class="submit-spinner"></span> })}
            </div>
            {move || submit_error.get().map(|message| view! { <p class="submit-error">{message}</p> })}
        </div>
    }
}
