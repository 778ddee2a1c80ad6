#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use shortly::application::services::LinkService;
use shortly::domain::LinkStore;
use shortly::infrastructure::storage::{FileStore, MemoryStore};
use shortly::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn state_with(store: Arc<dyn LinkStore>) -> AppState {
    AppState {
        link_service: Arc::new(LinkService::new(store, BASE_URL)),
    }
}

pub fn memory_state() -> AppState {
    state_with(Arc::new(MemoryStore::new()))
}

pub fn file_state(path: &Path) -> AppState {
    state_with(Arc::new(FileStore::open(path).unwrap()))
}
