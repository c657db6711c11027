use std::sync::Arc;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};
use crate::holds::dto::CheckoutDto;

pub(crate) struct CheckoutHoldCommand {
    circulation_service: Arc<dyn CirculationService>,
}

impl CheckoutHoldCommand {
    pub(crate) fn new(circulation_service: Arc<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

// The hold id arrives out-of-band as a path parameter; the controller
// fills it in after parsing the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutHoldCommandRequest {
    #[serde(default)]
    pub(crate) hold_id: String,
    pub(crate) patron_id: String,
    #[serde(default)]
    pub(crate) date_of_checkout: Option<NaiveDate>,
}

impl CheckoutHoldCommandRequest {
    pub fn new(hold_id: &str, patron_id: &str) -> Self {
        Self {
            hold_id: hold_id.to_string(),
            patron_id: patron_id.to_string(),
            date_of_checkout: None,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct CheckoutHoldCommandResponse {
    pub checkout: CheckoutDto,
}

impl CheckoutHoldCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

#[async_trait]
impl Command<CheckoutHoldCommandRequest, CheckoutHoldCommandResponse> for CheckoutHoldCommand {
    async fn execute(&self, req: CheckoutHoldCommandRequest) -> Result<CheckoutHoldCommandResponse, CommandError> {
        let date_of_checkout = req.date_of_checkout.unwrap_or_else(|| Utc::now().date_naive());
        self.circulation_service.checkout(req.hold_id.as_str(), date_of_checkout, req.patron_id.as_str())
            .await.map_err(CommandError::from).map(CheckoutHoldCommandResponse::new)
    }
}
