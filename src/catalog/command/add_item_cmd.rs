use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct AddItemCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddItemCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddItemCommandRequest {
    pub(crate) barcode: String,
    pub(crate) title: String,
    pub(crate) catalog_number: String,
}

impl AddItemCommandRequest {
    pub fn new(barcode: &str, title: &str, catalog_number: &str) -> Self {
        Self {
            barcode: barcode.to_string(),
            title: title.to_string(),
            catalog_number: catalog_number.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct AddItemCommandResponse {
    pub item: ItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand {
    async fn execute(&self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        self.catalog_service.add_item(req.barcode.as_str(), req.title.as_str(), req.catalog_number.as_str())
            .await.map_err(CommandError::from).map(AddItemCommandResponse::new)
    }
}
