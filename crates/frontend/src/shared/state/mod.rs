pub mod request_scope;
pub mod view_store;

pub use request_scope::{Liveness, RequestScope};
pub use view_store::ViewStore;
