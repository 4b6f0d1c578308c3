use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::traits::CancelPredicate;

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the flag, so one clone can be handed to the search as its
/// [`CancelPredicate`] while another (possibly on another thread) requests
/// cancellation. The token only signals; it never touches the grid.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }

    /// Clear a previous request so the token can be reused.
    #[inline]
    pub fn reset(&self) {
        self.done.store(false, Ordering::Relaxed);
    }
}

impl CancelPredicate for CancelToken {
    fn should_cancel(&mut self) -> bool {
        self.is_cancelled()
    }
}
