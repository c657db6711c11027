pub mod memory_hold_repository;

use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::holds::domain::model::HoldEntity;

// Holds are looked up by identity only; the desk never scans them.
#[async_trait]
pub(crate) trait HoldRepository: Sync + Send {
    async fn find_by_id(&self, id: &str) -> CirculationResult<Option<HoldEntity>>;

    async fn save(&self, hold: &HoldEntity) -> CirculationResult<HoldEntity>;
}
