//! Per-backend liveness token.
//!
//! Host callbacks and queued frame units can outlive the backend that created
//! them: a unit posted by `new_frame` may still sit in the message queue when
//! the backend is dropped. They hold only a [`Weak`] to the backend's shared
//! state, and both the upgrade and the token must succeed before they touch
//! anything.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use tracing::trace;

/// Flag that is `true` between the end of construction and the start of
/// teardown.
#[derive(Debug, Default)]
pub(crate) struct Liveness {
    alive: AtomicBool,
}

impl Liveness {
    /// A token that is not yet live.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn mark_alive(&self) {
        self.alive.store(true, Ordering::Release);
    }

    pub(crate) fn mark_dead(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// Anything that carries a [`Liveness`] token.
pub(crate) trait Live {
    fn liveness(&self) -> &Liveness;
}

/// Upgrade `weak` if its target still exists and is live.
///
/// `what` names the caller in the trace emitted when it is not.
pub(crate) fn upgrade_live<T: Live>(weak: &Weak<T>, what: &'static str) -> Option<Arc<T>> {
    match weak.upgrade() {
        Some(strong) if strong.liveness().is_alive() => Some(strong),
        _ => {
            trace!(what, "backend no longer live, skipping");
            None
        }
    }
}
