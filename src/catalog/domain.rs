pub mod service;

use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::items::dto::ItemDto;

// CatalogService registers lendable items and serves their current
// projection. It owns no circulation rules.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_item(&self, barcode: &str, title: &str,
                      catalog_number: &str) -> CirculationResult<ItemDto>;

    async fn find_item_by_barcode(&self, barcode: &str) -> CirculationResult<ItemDto>;
}
