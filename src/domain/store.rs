//! Storage trait for short link persistence.

use crate::domain::link::ShortLink;

/// Outcome of a [`LinkStore::store`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The link was inserted and, for durable stores, appended to the log.
    Stored,
    /// The link was inserted in memory but the log append failed; it will
    /// not survive a restart.
    StoredNotDurable,
    /// The code is already taken. Nothing was modified; the caller should
    /// retry with a different code.
    Rejected,
}

impl StoreOutcome {
    /// Returns `true` if this call inserted the link, durably or not.
    pub fn is_stored(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Storage interface for short links.
///
/// Both operations are synchronous and complete on the caller's thread:
/// a store is an in-memory insert plus, for durable implementations, one
/// small file append. There is no update and no delete; a stored link is
/// immutable for the life of the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::MemoryStore`] - volatile, in-process
/// - [`crate::infrastructure::storage::FileStore`] - append-only log backed
#[cfg_attr(test, mockall::automock)]
pub trait LinkStore: Send + Sync {
    /// Inserts `link` under its code only if that code is absent.
    ///
    /// Atomic with respect to concurrent calls for the same code: exactly
    /// one caller observes a stored outcome, all others observe
    /// [`StoreOutcome::Rejected`]. Calls for distinct codes do not block
    /// each other. An existing link is never overwritten.
    fn store(&self, link: ShortLink) -> StoreOutcome;

    /// Looks up a link by its code.
    ///
    /// Returns `None` for a code that was never stored. Not-found is an
    /// ordinary outcome, not an error.
    fn retrieve(&self, code: &str) -> Option<ShortLink>;
}
