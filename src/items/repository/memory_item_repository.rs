use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::library::{CirculationError, CirculationResult, ItemStatus};
use crate::items::domain::model::ItemEntity;
use crate::items::repository::ItemRepository;

// In-memory item store keyed by item id. Saves enforce barcode uniqueness
// on first insert and optimistic versioning on update; the stored version
// is bumped on every successful save.
#[derive(Clone, Default)]
pub(crate) struct MemoryItemRepository {
    items: Arc<RwLock<HashMap<String, ItemEntity>>>,
}

impl MemoryItemRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    async fn find_by_status(&self, barcode: &str, status: ItemStatus) -> CirculationResult<Option<ItemEntity>> {
        let items = self.items.read().await;
        Ok(items.values()
            .find(|item| item.barcode == barcode && item.item_status == status)
            .cloned())
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn find_available_by_barcode(&self, barcode: &str) -> CirculationResult<Option<ItemEntity>> {
        self.find_by_status(barcode, ItemStatus::Available).await
    }

    async fn find_on_hold_by_barcode(&self, barcode: &str) -> CirculationResult<Option<ItemEntity>> {
        self.find_by_status(barcode, ItemStatus::OnHold).await
    }

    async fn find_by_barcode(&self, barcode: &str) -> CirculationResult<Option<ItemEntity>> {
        let items = self.items.read().await;
        Ok(items.values()
            .find(|item| item.barcode == barcode)
            .cloned())
    }

    async fn save(&self, item: &ItemEntity) -> CirculationResult<ItemEntity> {
        let mut items = self.items.write().await;
        match items.get(item.item_id.as_str()) {
            Some(existing) => {
                if existing.version != item.version {
                    return Err(CirculationError::conflict(
                        format!("stale version {} for item {}", item.version, item.item_id).as_str()));
                }
            }
            None => {
                if items.values().any(|other| other.barcode == item.barcode) {
                    return Err(CirculationError::conflict(
                        format!("barcode {} is already registered", item.barcode).as_str()));
                }
            }
        }
        let mut saved = item.clone();
        saved.version += 1;
        items.insert(saved.item_id.to_string(), saved.clone());
        Ok(saved)
    }
}
