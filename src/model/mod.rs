mod store;
pub use store::{MemoryStore, ProgressKey};

pub mod entity;

mod error;
pub use error::{StoreError, StoreResult};

mod repo;
pub use repo::{CrudRepository, ResourceType, ResourceTyped};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ModelManager {
    store: Arc<MemoryStore>, // cloning is cheap, handlers share the same tables
}

impl ModelManager {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}
