//! Side Menu Component
//!
//! Two-entry navigation between the form and table views.

use leptos::prelude::*;

use crate::context::{AppContext, View};

const MENU_ENTRIES: &[(View, &str)] = &[(View::Form, "Form"), (View::Table, "Table")];

/// Navigation menu
#[component]
pub fn SideMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="side-menu">
            {MENU_ENTRIES.iter().map(|(target, label)| {
                let target = *target;
                let is_active = move || ctx.view.get() == target;
                view! {
                    <button
                        class=move || if is_active() { "menu-link active" } else { "menu-link" }
                        on:click=move |_| ctx.navigate(target)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
