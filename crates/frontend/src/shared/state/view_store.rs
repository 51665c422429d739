//! Owned, typed view state shared between a view model and its view.
//!
//! In the browser the state lives in a Leptos `RwSignal`, so the view
//! re-renders on change. Tests use `Rc<RefCell<_>>`.

use leptos::prelude::{GetUntracked, RwSignal, Update};
use std::cell::RefCell;
use std::rc::Rc;

pub trait ViewStore<T>: Clone + 'static {
    /// Current state, without subscribing the caller to changes
    fn snapshot(&self) -> T;

    /// Mutate the state in place.
    ///
    /// Returns `None` when the backing storage is gone (the view was
    /// disposed).
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> ViewStore<T> for RwSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn snapshot(&self) -> T {
        GetUntracked::get_untracked(self)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Update::try_update(self, f)
    }
}

impl<T> ViewStore<T> for Rc<RefCell<T>>
where
    T: Clone + 'static,
{
    fn snapshot(&self) -> T {
        self.borrow().clone()
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_store_modify_and_snapshot() {
        let store = Rc::new(RefCell::new(0u32));
        let doubled = store.modify(|v| {
            *v += 21;
            *v * 2
        });
        assert_eq!(doubled, Some(42));
        assert_eq!(store.snapshot(), 21);
    }
}
