//! Handlers for the shortening endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link from a plain-text request body.
///
/// # Endpoint
///
/// `POST /` with the original URL as the body.
///
/// Responds `201 Created` with the full short URL as `text/plain`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not an absolute URL with a host.
pub async fn shorten_text_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, String), AppError> {
    let link = state.link_service.shorten(body)?;
    let short_url = state.link_service.short_url(&link.code);

    Ok((StatusCode::CREATED, short_url))
}

/// Creates a short link from a JSON request.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// { "result": "http://localhost:8080/abc123" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails; errors use the standard
/// JSON error envelope.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(payload.url)?;
    let short_url = state.link_service.short_url(&link.code);

    Ok((StatusCode::CREATED, Json(ShortenResponse { result: short_url })))
}
