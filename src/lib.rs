//! # Shortly
//!
//! A small URL shortening service with a durable append-only storage log,
//! built with Axum.
//!
//! ## Architecture
//!
//! This crate follows a layered structure:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::ShortLink`] entity and
//!   the two-operation [`domain::LinkStore`] storage contract
//! - **Application Layer** ([`application`]) - Code generation, collision
//!   retry, and link resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Volatile and
//!   file-backed store implementations
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Storage
//!
//! Every accepted insert is appended to a JSON-lines log that is replayed
//! at startup, so code-to-URL mappings survive restarts. The mapping is
//! write-once: codes are never updated, deleted, or expired.
//!
//! ## Quick Start
//!
//! ```bash
//! # Durable store at ./storage.json (the default)
//! cargo run
//!
//! # Volatile store, custom bind address
//! cargo run -- --in-memory -a 0.0.0.0:8080
//! ```
//!
//! ## Configuration
//!
//! Flags and environment variables are interchangeable; see [`config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::{LinkStore, ShortLink, StoreOutcome};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
