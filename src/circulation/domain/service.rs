use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::circulation::domain::CirculationService;
use crate::core::domain::Configuration;
use crate::core::events::CirculationEvent;
use crate::core::library::{CirculationError, CirculationResult};
use crate::gateway::events::{CirculationEventHandler, HoldEventPublisher};
use crate::holds::domain::model::HoldEntity;
use crate::holds::dto::{CheckoutDto, HoldDto};
use crate::holds::repository::HoldRepository;
use crate::items::repository::ItemRepository;

// CirculationDesk orchestrates the circulation workflow. Commands mutate
// the hold; the item side is updated by the desk reacting to its own
// events, so neither aggregate reaches into the other's repository.
pub(crate) struct CirculationDesk {
    branch_id: String,
    item_repository: Arc<dyn ItemRepository>,
    hold_repository: Arc<dyn HoldRepository>,
    events_publisher: Arc<dyn HoldEventPublisher>,
}

impl CirculationDesk {
    pub(crate) fn new(config: &Configuration,
                      item_repository: Arc<dyn ItemRepository>,
                      hold_repository: Arc<dyn HoldRepository>,
                      events_publisher: Arc<dyn HoldEventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            item_repository,
            hold_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CirculationService for CirculationDesk {
    async fn place_hold(&self, barcode: &str, date_of_hold: NaiveDate,
                        patron_id: &str) -> CirculationResult<HoldDto> {
        let _item = self.item_repository.find_available_by_barcode(barcode).await?
            .ok_or_else(|| CirculationError::not_found(
                format!("no available item with barcode {}", barcode).as_str()))?;
        let hold = HoldEntity::place_hold(barcode, date_of_hold, patron_id);
        let hold = self.hold_repository.save(&hold).await?;
        let hold = self.events_publisher.hold_placed(&hold).await?;
        info!(branch = self.branch_id.as_str(), hold_id = hold.hold_id.as_str(),
              barcode, "hold placed");
        Ok(HoldDto::from(&hold))
    }

    async fn checkout(&self, hold_id: &str, date_of_checkout: NaiveDate,
                      patron_id: &str) -> CirculationResult<CheckoutDto> {
        let mut hold = self.hold_repository.find_by_id(hold_id).await?
            .ok_or_else(|| CirculationError::not_found(
                format!("hold {} not found", hold_id).as_str()))?;
        hold.checkout(date_of_checkout, patron_id)?;
        let hold = self.hold_repository.save(&hold).await?;
        let hold = self.events_publisher.book_checked_out(&hold).await?;
        info!(branch = self.branch_id.as_str(), hold_id = hold.hold_id.as_str(),
              "hold checked out");
        CheckoutDto::try_from_hold(&hold)
    }
}

// Event reactions keep the item status mirroring its hold's lifecycle.
// They run within the publishing command's call chain.
#[async_trait]
impl CirculationEventHandler for CirculationDesk {
    async fn handle(&self, event: &CirculationEvent) -> CirculationResult<()> {
        match event {
            CirculationEvent::HoldPlaced { barcode, .. } => {
                let mut item = self.item_repository.find_available_by_barcode(barcode.as_str()).await?
                    .ok_or_else(|| CirculationError::not_found(
                        format!("no available item with barcode {}", barcode).as_str()))?;
                item.mark_on_hold();
                let _ = self.item_repository.save(&item).await?;
                Ok(())
            }
            CirculationEvent::BookCheckedOut { barcode, .. } => {
                let mut item = self.item_repository.find_on_hold_by_barcode(barcode.as_str()).await?
                    .ok_or_else(|| CirculationError::not_found(
                        format!("no on-hold item with barcode {}", barcode).as_str()))?;
                item.mark_issued();
                let _ = self.item_repository.save(&item).await?;
                Ok(())
            }
        }
    }
}
