use std::sync::Arc;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};
use crate::holds::dto::HoldDto;

pub(crate) struct PlaceHoldCommand {
    circulation_service: Arc<dyn CirculationService>,
}

impl PlaceHoldCommand {
    pub(crate) fn new(circulation_service: Arc<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceHoldCommandRequest {
    pub(crate) barcode: String,
    pub(crate) patron_id: String,
    // defaults to today when the caller leaves it out
    #[serde(default)]
    pub(crate) date_of_hold: Option<NaiveDate>,
}

impl PlaceHoldCommandRequest {
    pub fn new(barcode: &str, patron_id: &str) -> Self {
        Self {
            barcode: barcode.to_string(),
            patron_id: patron_id.to_string(),
            date_of_hold: None,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct PlaceHoldCommandResponse {
    pub hold: HoldDto,
}

impl PlaceHoldCommandResponse {
    pub fn new(hold: HoldDto) -> Self {
        Self {
            hold,
        }
    }
}

#[async_trait]
impl Command<PlaceHoldCommandRequest, PlaceHoldCommandResponse> for PlaceHoldCommand {
    async fn execute(&self, req: PlaceHoldCommandRequest) -> Result<PlaceHoldCommandResponse, CommandError> {
        let date_of_hold = req.date_of_hold.unwrap_or_else(|| Utc::now().date_naive());
        self.circulation_service.place_hold(req.barcode.as_str(), date_of_hold, req.patron_id.as_str())
            .await.map_err(CommandError::from).map(PlaceHoldCommandResponse::new)
    }
}
