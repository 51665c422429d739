//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod key_path;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use key_path::{create_key, parse_key, strip_collection};
