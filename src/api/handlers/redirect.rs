//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution is a pure in-memory lookup; no disk access on this path.
///
/// # Errors
///
/// Returns 404 Not Found if the code was never stored. No distinction is
/// made between "never existed" and "malformed code".
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve(&code)?;

    debug!(code = %link.code, "redirecting");

    Ok(Redirect::temporary(&link.original_url))
}
