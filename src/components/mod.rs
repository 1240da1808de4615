//! UI Components
//!
//! Reusable Leptos components.

mod answers_form;
mod answers_table;
mod checkbox_group;
mod delete_confirm_button;
mod side_menu;
mod text_field;

pub use answers_form::FormView;
pub use answers_table::TableView;
pub use checkbox_group::CheckboxGroup;
pub use delete_confirm_button::DeleteConfirmButton;
pub use side_menu::SideMenu;
pub use text_field::TextField;
