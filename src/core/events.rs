use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// CirculationEvent is the closed set of domain events raised by the
// circulation desk. Cross-aggregate consistency is expressed through these
// variants instead of the hold holding a reference to the item repository:
// a subscriber receives the event and updates the other aggregate within
// the same synchronous call chain.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) enum CirculationEvent {
    HoldPlaced {
        hold_id: String,
        barcode: String,
        date_of_hold: NaiveDate,
    },
    BookCheckedOut {
        // carries the hold id as the item-id placeholder
        item_id: String,
        barcode: String,
        date_of_checkout: NaiveDate,
    },
}

impl CirculationEvent {
    pub fn hold_placed(hold_id: &str, barcode: &str, date_of_hold: NaiveDate) -> Self {
        CirculationEvent::HoldPlaced {
            hold_id: hold_id.to_string(),
            barcode: barcode.to_string(),
            date_of_hold,
        }
    }

    pub fn book_checked_out(item_id: &str, barcode: &str, date_of_checkout: NaiveDate) -> Self {
        CirculationEvent::BookCheckedOut {
            item_id: item_id.to_string(),
            barcode: barcode.to_string(),
            date_of_checkout,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CirculationEvent::HoldPlaced { .. } => "hold_placed",
            CirculationEvent::BookCheckedOut { .. } => "book_checked_out",
        }
    }

    pub fn barcode(&self) -> &str {
        match self {
            CirculationEvent::HoldPlaced { barcode, .. } => barcode.as_str(),
            CirculationEvent::BookCheckedOut { barcode, .. } => barcode.as_str(),
        }
    }
}
