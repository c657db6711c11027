use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemStatus;
use crate::items::domain::model::ItemEntity;
use crate::utils::date::serializer;

// ItemDto is the wire projection of a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemDto {
    pub id: String,
    pub version: i64,
    pub barcode: String,
    pub title: String,
    pub catalog_number: String,
    pub status: ItemStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl Identifiable for ItemDto {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&ItemEntity> for ItemDto {
    fn from(other: &ItemEntity) -> ItemDto {
        ItemDto {
            id: other.item_id.to_string(),
            version: other.version,
            barcode: other.barcode.to_string(),
            title: other.title.to_string(),
            catalog_number: other.catalog_number.to_string(),
            status: other.item_status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
