pub mod details;
pub mod list;
pub mod not_found;
