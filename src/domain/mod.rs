//! Domain layer containing the core entity and storage contract.
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation
//!   layers
//! - [`store::LinkStore`] defines the storage contract; the volatile and
//!   durable implementations live in [`crate::infrastructure::storage`]

pub mod link;
pub mod store;

pub use link::ShortLink;
pub use store::{LinkStore, StoreOutcome};
