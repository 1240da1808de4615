//! Table View
//!
//! Registered answers as question/answer rows, with edit and delete
//! actions on top of the table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::adapter;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, View};
use crate::models::AnswersSnapshot;
use crate::store::{use_app_store, AppStateStoreFields};

/// Checked interest labels joined for display
fn interests_cell(answers: &AnswersSnapshot) -> String {
    answers
        .interests
        .iter()
        .flat_map(|entry| entry.0.values())
        .filter(|attrs| attrs.is_checked)
        .map(|attrs| attrs.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn rows(answers: &AnswersSnapshot) -> Vec<(&'static str, String)> {
    vec![
        ("name", answers.name.clone()),
        ("age", answers.age.clone()),
        ("mail", answers.mail.clone()),
        ("interests", interests_cell(answers)),
    ]
}

/// Answers table view
#[component]
pub fn TableView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            let _ = adapter::reset_answers(&store).await;
        });
    });

    view! {
        <div class="table-view">
            <div class="table-actions">
                <button class="edit-btn" on:click=move |_| ctx.navigate(View::Form)>
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    confirm_text="Delete all answers?"
                    on_confirm=on_delete
                />
            </div>

            <table class="answers-table">
                <caption>"Questions and Answers Registered"</caption>
                <thead>
                    <tr>
                        <th>"Questions"</th>
                        <th>"Answers"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let answers = store.answers().get();
                        rows(&answers)
                            .into_iter()
                            .map(|(question, answer)| {
                                let display = if answer.is_empty() { "-".to_string() } else { answer };
                                view! {
                                    <tr>
                                        <th scope="row">{question}</th>
                                        <td>{display}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WireOption;

    #[test]
    fn test_interests_cell_joins_checked_labels() {
        let answers = AnswersSnapshot {
            interests: vec![
                WireOption::new("sports", "Sports", true),
                WireOption::new("music", "Music", false),
                WireOption::new("movies", "Movies", true),
            ],
            ..AnswersSnapshot::default()
        };
        assert_eq!(interests_cell(&answers), "Sports, Movies");
    }

    #[test]
    fn test_rows_cover_every_question() {
        let answers = AnswersSnapshot::default();
        let questions: Vec<_> = rows(&answers).into_iter().map(|(q, _)| q).collect();
        assert_eq!(questions, vec!["name", "age", "mail", "interests"]);
    }
}
