use std::sync::Arc;
use crate::core::repository::RepositoryStore;
use crate::holds::repository::HoldRepository;
use crate::holds::repository::memory_hold_repository::MemoryHoldRepository;

pub(crate) async fn create_hold_repository(store: RepositoryStore) -> Arc<dyn HoldRepository> {
    match store {
        RepositoryStore::InMemory => {
            Arc::new(MemoryHoldRepository::new())
        }
    }
}
