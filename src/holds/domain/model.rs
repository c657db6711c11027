use chrono::{NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{CirculationError, CirculationResult, HoldStatus};
use crate::utils::date::serializer;

// HoldEntity binds a patron to an item pending checkout. The barcode and
// patron references are fixed at placement and never change.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct HoldEntity {
    pub hold_id: String,
    pub version: i64,
    pub book_barcode: String,
    pub patron_id: String,
    pub hold_status: HoldStatus,
    pub date_of_hold: NaiveDate,
    pub date_of_checkout: Option<NaiveDate>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl HoldEntity {
    pub fn place_hold(barcode: &str, date_of_hold: NaiveDate, patron_id: &str) -> Self {
        Self {
            hold_id: Uuid::now_v7().to_string(),
            version: 0,
            book_barcode: barcode.to_string(),
            patron_id: patron_id.to_string(),
            hold_status: HoldStatus::Placed,
            date_of_hold,
            date_of_checkout: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // Both guards run before any mutation, so a rejected checkout leaves
    // the hold untouched.
    pub fn checkout(&mut self, date_of_checkout: NaiveDate, patron_id: &str) -> CirculationResult<()> {
        if self.patron_id != patron_id {
            return Err(CirculationError::not_granted(
                "Hold does not belong to the specified patron", None));
        }
        if self.hold_status != HoldStatus::Placed {
            return Err(CirculationError::validation(
                format!("hold {} is not in placed state", self.hold_id).as_str(),
                Some("400".to_string())));
        }
        self.hold_status = HoldStatus::CheckedOut;
        self.date_of_checkout = Some(date_of_checkout);
        self.updated_at = Utc::now().naive_utc();
        Ok(())
    }
}

impl Identifiable for HoldEntity {
    fn id(&self) -> String {
        self.hold_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
