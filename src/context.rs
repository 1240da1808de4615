//! Application Context
//!
//! Navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// The two views of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    Table,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active view - read
    pub view: ReadSignal<View>,
    /// Active view - write
    set_view: WriteSignal<View>,
}

impl AppContext {
    pub fn new(view: (ReadSignal<View>, WriteSignal<View>)) -> Self {
        Self {
            view: view.0,
            set_view: view.1,
        }
    }

    /// Switch the active view
    pub fn navigate(&self, view: View) {
        self.set_view.set(view);
    }
}
