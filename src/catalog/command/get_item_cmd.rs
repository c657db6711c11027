use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct GetItemCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetItemCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetItemCommandRequest {
    pub(crate) barcode: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetItemCommandResponse {
    pub item: ItemDto,
}

impl GetItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<GetItemCommandRequest, GetItemCommandResponse> for GetItemCommand {
    async fn execute(&self, req: GetItemCommandRequest) -> Result<GetItemCommandResponse, CommandError> {
        self.catalog_service.find_item_by_barcode(req.barcode.as_str())
            .await.map_err(CommandError::from).map(GetItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::command::get_item_cmd::{GetItemCommand, GetItemCommandRequest};
    use crate::circulation::factory::create_app_state;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref STATE: AsyncOnce<AppState> = AsyncOnce::new(async {
                create_app_state("test", RepositoryStore::InMemory).await
            });
    }

    #[tokio::test]
    async fn test_should_run_get_item() {
        let state = STATE.get().await.clone();
        let add_cmd = AddItemCommand::new(state.catalog_service.clone());
        let get_cmd = GetItemCommand::new(state.catalog_service.clone());

        let added = add_cmd.execute(AddItemCommandRequest::new("get-item-1", "test book", "1234567890"))
            .await.expect("should add item");
        let res = get_cmd.execute(GetItemCommandRequest { barcode: "get-item-1".to_string() })
            .await.expect("should get item");
        assert_eq!(added.item.id, res.item.id);
    }

    #[tokio::test]
    async fn test_should_report_unknown_item() {
        let state = STATE.get().await.clone();
        let get_cmd = GetItemCommand::new(state.catalog_service.clone());

        let res = get_cmd.execute(GetItemCommandRequest { barcode: "get-item-missing".to_string() }).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
