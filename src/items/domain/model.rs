use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemStatus;
use crate::utils::date::serializer;

// ItemEntity abstracts a physical lendable item in the catalog. Copies of
// the same title circulate under distinct barcodes.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ItemEntity {
    pub item_id: String,
    pub version: i64,
    pub barcode: String,
    pub title: String,
    pub catalog_number: String,
    pub item_status: ItemStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl ItemEntity {
    pub fn add_item(barcode: &str, title: &str, catalog_number: &str) -> Self {
        Self {
            item_id: Uuid::now_v7().to_string(),
            version: 0,
            barcode: barcode.to_string(),
            title: title.to_string(),
            catalog_number: catalog_number.to_string(),
            item_status: ItemStatus::Available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // Valid only while Available. The orchestrator guarantees the
    // precondition by looking up available items only, so any other source
    // state is an orchestration bug upstream.
    pub fn mark_on_hold(&mut self) {
        assert_eq!(ItemStatus::Available, self.item_status,
                   "item {} cannot go on hold from {}", self.item_id, self.item_status);
        self.item_status = ItemStatus::OnHold;
        self.updated_at = Utc::now().naive_utc();
    }

    // Valid only while OnHold; same contract-violation policy.
    pub fn mark_issued(&mut self) {
        assert_eq!(ItemStatus::OnHold, self.item_status,
                   "item {} cannot be issued from {}", self.item_id, self.item_status);
        self.item_status = ItemStatus::Issued;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for ItemEntity {
    fn id(&self) -> String {
        self.item_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
