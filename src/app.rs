//! Answers App
//!
//! Root component: owns the store and navigation context, renders the
//! active view next to the side menu.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FormView, SideMenu, TableView};
use crate::context::{AppContext, View};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // The store lives for the app lifetime; the views reach it through the
    // adapter, never as ambient module state.
    let store = Store::new(AppState::default());
    provide_context(store);

    // Landing view is the form
    let (view, set_view) = signal(View::Form);
    provide_context(AppContext::new((view, set_view)));

    view! {
        <div class="app-layout">
            <SideMenu />
            <main class="content">
                {move || match view.get() {
                    View::Form => view! { <FormView /> }.into_any(),
                    View::Table => view! { <TableView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
