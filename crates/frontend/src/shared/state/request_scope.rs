//! Liveness guards for asynchronous completions.
//!
//! A view model owns one `RequestScope`. Each request captures a
//! [`Liveness`] token; invalidating the scope (navigation, view cleanup)
//! turns every token issued before into a stale one, and completions check
//! the token before touching view state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct RequestScope {
    generation: Arc<AtomicU64>,
}

#[derive(Clone, Debug)]
pub struct Liveness {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Liveness {
        Liveness {
            generation: self.generation.clone(),
            issued: self.generation.load(Ordering::Acquire),
        }
    }

    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

impl Liveness {
    pub fn is_live(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.issued
    }
}
