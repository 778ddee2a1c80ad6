//! Durable link store layering an append-only log over [`MemoryStore`].

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::{LinkStore, ShortLink, StoreOutcome};
use crate::infrastructure::storage::StoreError;
use crate::infrastructure::storage::memory::MemoryStore;

/// File-backed implementation of [`LinkStore`].
///
/// Every accepted insert is appended to a JSON-lines log which is replayed
/// on startup, so the mapping survives restarts. The log is append-only:
/// it is never rewritten or compacted, and grows with the total number of
/// accepted inserts over its lifetime.
///
/// # Crash window
///
/// A crash between the in-memory insert and the completed append leaves a
/// link visible to the running process but absent from the log; a restart
/// will not recover it. This is an accepted, bounded inconsistency for a
/// single-process store, not something to close with two-phase commit.
#[derive(Debug)]
pub struct FileStore {
    memory: MemoryStore,
    // Appends must not interleave; one record is serialized and written
    // per critical section. The in-memory insert is not under this lock.
    log: Mutex<File>,
}

impl FileStore {
    /// Opens the log at `path`, creating it if absent, and replays every
    /// record into a fresh in-memory store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be opened or read, and
    /// [`StoreError::Corrupt`] if any line fails to deserialize. A corrupt
    /// log is unrecoverable: silently skipping records would start the
    /// store with missing data.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path.as_ref())?;

        let memory = MemoryStore::new();
        for (index, line) in BufReader::new(&file).lines().enumerate() {
            let line = line?;
            let link: ShortLink =
                serde_json::from_str(&line).map_err(|source| StoreError::Corrupt {
                    line: index + 1,
                    source,
                })?;

            let code = link.code.clone();
            if memory.store(link) == StoreOutcome::Rejected {
                // A well-formed log never repeats a code; the first
                // occurrence already restored the correct value.
                tracing::warn!(%code, line = index + 1, "duplicate code in storage log");
            }
        }

        tracing::debug!(
            path = %path.as_ref().display(),
            links = memory.len(),
            "storage log replayed"
        );

        Ok(Self {
            memory,
            log: Mutex::new(file),
        })
    }

    /// Number of links currently held.
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    /// Returns `true` if no links are held.
    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    fn append(&self, link: &ShortLink) -> std::io::Result<()> {
        let mut record = serde_json::to_vec(link)?;
        record.push(b'\n');

        // A poisoned lock only means another writer panicked mid-append;
        // the file handle itself is still usable.
        let mut log = self
            .log
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        log.write_all(&record)?;
        log.flush()
    }
}

impl LinkStore for FileStore {
    fn store(&self, link: ShortLink) -> StoreOutcome {
        // A rejected insert writes nothing to the log.
        if self.memory.store(link.clone()) == StoreOutcome::Rejected {
            return StoreOutcome::Rejected;
        }

        match self.append(&link) {
            Ok(()) => StoreOutcome::Stored,
            Err(error) => {
                // The in-memory state is still correct and servable, so the
                // insert stands, but durability is gone for this link.
                tracing::error!(code = %link.code, %error, "storage log append failed");
                StoreOutcome::StoredNotDurable
            }
        }
    }

    fn retrieve(&self, code: &str) -> Option<ShortLink> {
        self.memory.retrieve(code)
    }
}
