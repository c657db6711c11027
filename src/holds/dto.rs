use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::library::{CirculationError, CirculationResult};
use crate::holds::domain::model::HoldEntity;

// HoldDto is the wire projection returned by hold placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HoldDto {
    pub id: String,
    pub book_barcode: String,
    pub patron_id: String,
    pub date_of_hold: NaiveDate,
}

impl From<&HoldEntity> for HoldDto {
    fn from(other: &HoldEntity) -> HoldDto {
        HoldDto {
            id: other.hold_id.to_string(),
            book_barcode: other.book_barcode.to_string(),
            patron_id: other.patron_id.to_string(),
            date_of_hold: other.date_of_hold,
        }
    }
}

// CheckoutDto is the wire projection returned by checkout. Only a
// checked-out hold can be projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutDto {
    pub hold_id: String,
    pub patron_id: String,
    pub date_of_checkout: NaiveDate,
}

impl CheckoutDto {
    pub fn try_from_hold(other: &HoldEntity) -> CirculationResult<CheckoutDto> {
        let date_of_checkout = other.date_of_checkout.ok_or_else(
            || CirculationError::runtime(
                format!("hold {} has no checkout date", other.hold_id).as_str(), None))?;
        Ok(CheckoutDto {
            hold_id: other.hold_id.to_string(),
            patron_id: other.patron_id.to_string(),
            date_of_checkout,
        })
    }
}
