use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{CirculationError, CirculationResult};
use crate::items::domain::model::ItemEntity;
use crate::items::dto::ItemDto;
use crate::items::repository::ItemRepository;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    item_repository: Arc<dyn ItemRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration,
                      item_repository: Arc<dyn ItemRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            item_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_item(&self, barcode: &str, title: &str,
                      catalog_number: &str) -> CirculationResult<ItemDto> {
        let item = ItemEntity::add_item(barcode, title, catalog_number);
        let item = self.item_repository.save(&item).await?;
        info!(branch = self.branch_id.as_str(), barcode, "item added to catalog");
        Ok(ItemDto::from(&item))
    }

    async fn find_item_by_barcode(&self, barcode: &str) -> CirculationResult<ItemDto> {
        let item = self.item_repository.find_by_barcode(barcode).await?
            .ok_or_else(|| CirculationError::not_found(
                format!("no item with barcode {}", barcode).as_str()))?;
        Ok(ItemDto::from(&item))
    }
}
