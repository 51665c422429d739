//! Category object page
//!
//! - view_model.rs: mode state machine, view state and commands
//! - view.rs: Leptos component

mod view;
pub mod view_model;

pub use view::CategoryDetails;
