use std::sync::Arc;

use crate::{adapters::store::memory::MemoryMemberStore, commands::DomainLogic};

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub domain: DomainLogic<MemoryMemberStore>,
}

impl AppState {
    pub fn new(store: Arc<MemoryMemberStore>) -> Self {
        Self {
            domain: DomainLogic::new(store),
        }
    }
}
