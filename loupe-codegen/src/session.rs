//! Thread-local binding of the current compiler session.
//!
//! One process may host several independent generation runs at once, so the
//! current [`Session`] is bound per thread: set it before constructing views
//! for a run, clear it when the run ends. Only doc-comment lookups read it.

use std::cell::RefCell;
use std::sync::Arc;

use loupe_model::Session;

thread_local! {
    static CURRENT: RefCell<Option<Arc<Session>>> = const { RefCell::new(None) };
}

/// Bind the session for the calling thread.
pub fn set(session: Arc<Session>) {
    CURRENT.with(|slot| *slot.borrow_mut() = Some(session));
}

/// Clear the calling thread's session binding.
pub fn clear() {
    CURRENT.with(|slot| *slot.borrow_mut() = None);
}

/// Get the session currently bound on the calling thread.
pub fn current() -> Option<Arc<Session>> {
    CURRENT.with(|slot| slot.borrow().clone())
}

/// Run `f` with `session` bound, restoring the previous binding afterwards.
pub fn bind<T>(session: Arc<Session>, f: impl FnOnce() -> T) -> T {
    struct Restore(Option<Arc<Session>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            CURRENT.with(|slot| *slot.borrow_mut() = self.0.take());
        }
    }

    let previous = CURRENT.with(|slot| slot.borrow_mut().replace(session));
    let _restore = Restore(previous);
    f()
}
