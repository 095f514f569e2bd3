//! UI Components
//!
//! Generic list/form screens plus their building blocks.

mod field_input;
mod form_view;
mod list_view;
mod nav_bar;
mod record_table;
mod type_selector;

pub use form_view::form_view;
pub use list_view::list_view;
pub use nav_bar::NavBar;
