//! Validation for URLs submitted for shortening.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates that `original_url` is an absolute URL with a host.
///
/// The store treats the URL as opaque; this is the only place its shape is
/// checked. Host-less schemes (`mailto:`, `data:`) are rejected because the
/// redirect endpoint only makes sense for network locations.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL does not parse or has no host.
pub fn validate_original_url(original_url: &str) -> Result<(), AppError> {
    let parsed = Url::parse(original_url)
        .map_err(|e| AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() })))?;

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::bad_request(
            "Invalid URL",
            json!({ "reason": "URL has no host" }),
        ));
    }

    Ok(())
}
