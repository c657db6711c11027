use std::sync::Arc;
use crate::core::repository::RepositoryStore;
use crate::items::repository::ItemRepository;
use crate::items::repository::memory_item_repository::MemoryItemRepository;

pub(crate) async fn create_item_repository(store: RepositoryStore) -> Arc<dyn ItemRepository> {
    match store {
        RepositoryStore::InMemory => {
            Arc::new(MemoryItemRepository::new())
        }
    }
}
