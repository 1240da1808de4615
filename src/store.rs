//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created once in `App`, provided via context, and lives for the app
//! lifetime; the form and table views are its only readers and writers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::AnswersSnapshot;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Registered answers, replaced wholesale on submit
    pub answers: AnswersSnapshot,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Read the current snapshot out of the store
pub fn store_read_answers(store: &AppStore) -> AnswersSnapshot {
    store.answers().get()
}

/// Replace the snapshot wholesale
pub fn store_write_answers(store: &AppStore, answers: AnswersSnapshot) {
    store.answers().set(answers);
}
