//! Link creation and resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::{LinkStore, ShortLink, StoreOutcome};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_original_url;

/// Service for creating and resolving shortened links.
///
/// Owns code generation and collision retry on top of the storage
/// contract; the store itself never retries a rejected insert.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<dyn LinkStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }

    /// Creates a short link for `original_url`.
    ///
    /// Generates a random code and attempts the insert; a rejected insert
    /// means the code was taken, so a fresh code is drawn and the insert is
    /// retried, up to a bounded number of attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not parse or has no
    /// host, and [`AppError::Internal`] if every attempt collided.
    pub fn shorten(&self, original_url: String) -> Result<ShortLink, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        validate_original_url(&original_url)?;

        for _ in 0..MAX_ATTEMPTS {
            let link = ShortLink::new(generate_code(), original_url.clone());

            match self.store.store(link.clone()) {
                StoreOutcome::Rejected => continue,
                StoreOutcome::StoredNotDurable => {
                    tracing::warn!(
                        code = %link.code,
                        "short link created but not persisted; it will not survive a restart"
                    );
                    return Ok(link);
                }
                StoreOutcome::Stored => return Ok(link),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never stored.
    pub fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        self.store
            .retrieve(code)
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Constructs the full public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
