pub mod router;
pub mod routes;

pub use router::{AppRouter, Navigator, Route, Screen, Target, NEW_OBJECT_ID};
