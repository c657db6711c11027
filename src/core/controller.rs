use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::circulation::domain::CirculationService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

// AppState carries the services wired at startup. The in-memory
// repositories live behind these services, so the same instances must be
// shared by every request.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog_service: Arc<dyn CatalogService>,
    pub(crate) circulation_service: Arc<dyn CirculationService>,
}

impl AppState {
    pub fn new(config: &Configuration,
               catalog_service: Arc<dyn CatalogService>,
               circulation_service: Arc<dyn CirculationService>) -> AppState {
        AppState {
            config: config.clone(),
            catalog_service,
            circulation_service,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Access { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Conflict { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
