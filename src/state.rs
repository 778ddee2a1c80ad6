use std::sync::Arc;

use crate::application::services::LinkService;

/// Shared application state injected into all handlers.
///
/// The store variant (in-memory or file-backed) is chosen once at startup
/// and reaches handlers only through the service; nothing here is global.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}
