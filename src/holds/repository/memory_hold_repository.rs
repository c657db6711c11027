use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::library::{CirculationError, CirculationResult};
use crate::holds::domain::model::HoldEntity;
use crate::holds::repository::HoldRepository;

// In-memory hold store keyed by hold id with optimistic versioning on save.
#[derive(Clone, Default)]
pub(crate) struct MemoryHoldRepository {
    holds: Arc<RwLock<HashMap<String, HoldEntity>>>,
}

impl MemoryHoldRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HoldRepository for MemoryHoldRepository {
    async fn find_by_id(&self, id: &str) -> CirculationResult<Option<HoldEntity>> {
        let holds = self.holds.read().await;
        Ok(holds.get(id).cloned())
    }

    async fn save(&self, hold: &HoldEntity) -> CirculationResult<HoldEntity> {
        let mut holds = self.holds.write().await;
        if let Some(existing) = holds.get(hold.hold_id.as_str()) {
            if existing.version != hold.version {
                return Err(CirculationError::conflict(
                    format!("stale version {} for hold {}", hold.version, hold.hold_id).as_str()));
            }
        }
        let mut saved = hold.clone();
        saved.version += 1;
        holds.insert(saved.hold_id.to_string(), saved.clone());
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::holds::domain::model::HoldEntity;
    use crate::holds::repository::HoldRepository;
    use crate::holds::repository::memory_hold_repository::MemoryHoldRepository;

    #[tokio::test]
    async fn test_should_save_and_find_by_id() {
        let repository = MemoryHoldRepository::new();
        let hold = HoldEntity::place_hold("12345", Utc::now().date_naive(), "patron1");
        let saved = repository.save(&hold).await.expect("should save hold");
        assert_eq!(1, saved.version);

        let found = repository.find_by_id(hold.hold_id.as_str()).await.expect("should look up hold");
        assert_eq!(Some(saved), found);
        let missing = repository.find_by_id("unknown").await.expect("should look up hold");
        assert_eq!(None, missing);
    }

    #[tokio::test]
    async fn test_should_reject_stale_version() {
        let repository = MemoryHoldRepository::new();
        let hold = HoldEntity::place_hold("12345", Utc::now().date_naive(), "patron1");
        let saved = repository.save(&hold).await.expect("should save hold");

        // the original snapshot still carries version 0
        let res = repository.save(&hold).await;
        assert!(res.is_err());
        let stored = repository.find_by_id(hold.hold_id.as_str()).await.expect("should look up hold");
        assert_eq!(Some(saved), stored);
    }
}
