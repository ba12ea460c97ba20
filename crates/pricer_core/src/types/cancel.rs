//! Cooperative cancellation for long-running pricing loops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::error::PricingError;

/// Shared cancellation flag.
///
/// Clones observe the same flag. Pricers check it between lattice layers or
/// simulation batches, never inside the inner loop.
///
/// # Examples
/// ```
/// use pricer_core::types::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
///
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Fails with [`PricingError::Cancelled`] if cancellation was requested.
    #[inline]
    pub fn check(&self, completed: usize, total: usize) -> Result<(), PricingError> {
        if self.is_cancelled() {
            Err(PricingError::Cancelled { completed, total })
        } else {
            Ok(())
        }
    }
}
