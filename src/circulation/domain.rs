pub mod service;

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::core::library::CirculationResult;
use crate::holds::dto::{CheckoutDto, HoldDto};

// CirculationService accepts the two circulation commands. Each call runs
// a single synchronous chain: load, transition, persist, publish, react.
#[async_trait]
pub(crate) trait CirculationService: Sync + Send {
    async fn place_hold(&self, barcode: &str, date_of_hold: NaiveDate,
                        patron_id: &str) -> CirculationResult<HoldDto>;

    async fn checkout(&self, hold_id: &str, date_of_checkout: NaiveDate,
                      patron_id: &str) -> CirculationResult<CheckoutDto>;
}
