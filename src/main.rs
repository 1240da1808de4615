//! Answers Frontend Entry Point

mod adapter;
mod app;
mod components;
mod context;
mod form;
mod interests;
mod models;
mod options;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
