//! Link storage implementations: volatile in-memory and durable file-backed.
//!
//! One of the two is chosen at startup (see [`crate::server::run`]) and
//! never swapped at runtime.

pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Construction-time storage failure.
///
/// Either variant prevents the store, and therefore the service, from
/// starting. Per-call outcomes (collision, not-found) are not errors; see
/// [`crate::domain::StoreOutcome`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage log could not be opened or read.
    #[error("storage log I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A storage log record failed to deserialize during replay.
    #[error("corrupt storage log record at line {line}: {source}")]
    Corrupt {
        line: usize,
        source: serde_json::Error,
    },
}
