use std::sync::Arc;
use async_trait::async_trait;
use crate::core::events::CirculationEvent;
use crate::core::library::{CirculationError, CirculationResult};
use crate::holds::domain::model::HoldEntity;

// A subscriber reacting to circulation events within the same synchronous
// call chain as the command that raised them.
#[async_trait]
pub(crate) trait CirculationEventHandler: Sync + Send {
    async fn handle(&self, event: &CirculationEvent) -> CirculationResult<()>;
}

// HoldEventPublisher delivers domain events to subscribers and hands back
// the hold of record. `publish` is the identity transform on the event;
// the hold-level methods build the event from the aggregate so a
// subscriber may veto the operation by failing.
#[async_trait]
pub(crate) trait HoldEventPublisher: Sync + Send {
    async fn subscribe(&self, subscriber: Arc<dyn CirculationEventHandler>);

    async fn publish(&self, event: &CirculationEvent) -> CirculationResult<CirculationEvent>;

    async fn hold_placed(&self, hold: &HoldEntity) -> CirculationResult<HoldEntity> {
        let event = CirculationEvent::hold_placed(
            hold.hold_id.as_str(), hold.book_barcode.as_str(), hold.date_of_hold);
        let _ = self.publish(&event).await?;
        Ok(hold.clone())
    }

    async fn book_checked_out(&self, hold: &HoldEntity) -> CirculationResult<HoldEntity> {
        let date_of_checkout = hold.date_of_checkout.ok_or_else(
            || CirculationError::runtime(
                format!("hold {} has no checkout date", hold.hold_id).as_str(), None))?;
        // the hold id stands in for the item id until the item side is loaded
        let event = CirculationEvent::book_checked_out(
            hold.hold_id.as_str(), hold.book_barcode.as_str(), date_of_checkout);
        let _ = self.publish(&event).await?;
        Ok(hold.clone())
    }
}
