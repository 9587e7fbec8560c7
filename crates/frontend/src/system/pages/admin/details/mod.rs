//! Menu item details form (admin dashboard).
//!
//! Simplified MVVM split:
//! - view_model.rs: form state, parsing and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::MenuItemDetails;
pub use view_model::{MenuItemDetailsViewModel, MenuItemForm};
