pub mod memory_item_repository;

use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::items::domain::model::ItemEntity;

// Lookup contract for items. Hold placement observes Available items only
// and the checkout reaction observes OnHold items only; that filter is
// what enforces single-holder exclusivity, not an in-memory collection.
// The repository is also the sole arbiter of concurrent-write safety.
#[async_trait]
pub(crate) trait ItemRepository: Sync + Send {
    async fn find_available_by_barcode(&self, barcode: &str) -> CirculationResult<Option<ItemEntity>>;

    async fn find_on_hold_by_barcode(&self, barcode: &str) -> CirculationResult<Option<ItemEntity>>;

    async fn find_by_barcode(&self, barcode: &str) -> CirculationResult<Option<ItemEntity>>;

    async fn save(&self, item: &ItemEntity) -> CirculationResult<ItemEntity>;
}
