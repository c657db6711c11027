use axum::{
    extract::{Path, State},
    response::Json,
    Router,
    routing::{get, post},
};
use serde_json::Value;
use crate::catalog::controller::{add_item, find_item_by_barcode};
use crate::circulation::command::checkout_hold_cmd::{CheckoutHoldCommand, CheckoutHoldCommandRequest, CheckoutHoldCommandResponse};
use crate::circulation::command::place_hold_cmd::{PlaceHoldCommand, PlaceHoldCommandRequest, PlaceHoldCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

// Route table of the borrow binary: the circulation commands plus the
// catalog registration surface.
pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/catalog/items", post(add_item))
        .route("/catalog/items/:barcode", get(find_item_by_barcode))
        .route("/borrow/holds", post(place_hold))
        .route("/borrow/holds/:hold_id/checkout", post(checkout_hold))
        .with_state(state)
}

pub(crate) async fn place_hold(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<PlaceHoldCommandResponse>, ServerError> {
    let req: PlaceHoldCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = PlaceHoldCommand::new(state.circulation_service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn checkout_hold(
    State(state): State<AppState>,
    Path(hold_id): Path<String>,
    json: Json<Value>) -> Result<Json<CheckoutHoldCommandResponse>, ServerError> {
    let mut req: CheckoutHoldCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.hold_id = hold_id;
    let res = CheckoutHoldCommand::new(state.circulation_service.clone()).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use crate::circulation::controller::build_router;
    use crate::circulation::factory::create_app_state;
    use crate::core::repository::RepositoryStore;

    async fn setup() -> Router {
        let state = create_app_state("test", RepositoryStore::InMemory).await;
        build_router(state)
    }

    async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("should build request");
        let response = app.clone().oneshot(request).await.expect("should send request");
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.expect("should read body");
        let parsed = if bytes.is_empty() { Value::Null } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, parsed)
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("should build request");
        let response = app.clone().oneshot(request).await.expect("should send request");
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.expect("should read body");
        let parsed = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, parsed)
    }

    #[tokio::test]
    async fn test_place_hold_rest_call() {
        let app = setup().await;

        let (status, _) = send_json(&app, "POST", "/catalog/items", json!({
            "barcode": "64321704",
            "title": "Introducing Spring Framework 6",
            "catalogNumber": "9781484271131",
        })).await;
        assert_eq!(StatusCode::OK, status);

        let (status, hold) = send_json(&app, "POST", "/borrow/holds", json!({
            "barcode": "64321704",
            "patronId": "018dd2f7-b241-7d27-be99-45fb3f145ddf",
        })).await;
        assert_eq!(StatusCode::OK, status);
        assert!(hold.get("id").and_then(Value::as_str).is_some());
        assert_eq!("64321704", hold["bookBarcode"]);
        assert_eq!("018dd2f7-b241-7d27-be99-45fb3f145ddf", hold["patronId"]);
        assert!(hold.get("dateOfHold").is_some());

        // the item now mirrors the hold
        let (status, item) = get_json(&app, "/catalog/items/64321704").await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("OnHold", item["status"]);
    }

    #[tokio::test]
    async fn test_checkout_rest_call() {
        let app = setup().await;

        let (status, _) = send_json(&app, "POST", "/catalog/items", json!({
            "barcode": "24680157",
            "title": "Test Book",
            "catalogNumber": "1234567890",
        })).await;
        assert_eq!(StatusCode::OK, status);

        let (_, hold) = send_json(&app, "POST", "/borrow/holds", json!({
            "barcode": "24680157",
            "patronId": "018dd2f7-b241-7d27-be99-45fb3f145ddf",
        })).await;
        let hold_id = hold["id"].as_str().expect("hold id should be set").to_string();

        let (status, checkout) = send_json(
            &app, "POST", format!("/borrow/holds/{}/checkout", hold_id).as_str(), json!({
                "patronId": "018dd2f7-b241-7d27-be99-45fb3f145ddf",
            })).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(hold_id.as_str(), checkout["holdId"]);
        assert_eq!("018dd2f7-b241-7d27-be99-45fb3f145ddf", checkout["patronId"]);
        assert!(checkout.get("dateOfCheckout").is_some());

        let (_, item) = get_json(&app, "/catalog/items/24680157").await;
        assert_eq!("Issued", item["status"]);
    }

    #[tokio::test]
    async fn test_checkout_by_other_patron_is_rejected() {
        let app = setup().await;

        let _ = send_json(&app, "POST", "/catalog/items", json!({
            "barcode": "13579246",
            "title": "Test Book",
            "catalogNumber": "1234567890",
        })).await;
        let (_, hold) = send_json(&app, "POST", "/borrow/holds", json!({
            "barcode": "13579246",
            "patronId": "018dd2f7-b241-7d27-be99-45fb3f145ddf",
        })).await;
        let hold_id = hold["id"].as_str().expect("hold id should be set").to_string();

        let (status, _) = send_json(
            &app, "POST", format!("/borrow/holds/{}/checkout", hold_id).as_str(), json!({
                "patronId": "018dc74a-4830-75cf-a194-5e9815727b02",
            })).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_hold_on_held_item_is_rejected() {
        let app = setup().await;

        let _ = send_json(&app, "POST", "/catalog/items", json!({
            "barcode": "86421357",
            "title": "Test Book",
            "catalogNumber": "1234567890",
        })).await;
        let (status, _) = send_json(&app, "POST", "/borrow/holds", json!({
            "barcode": "86421357",
            "patronId": "018dd2f7-b241-7d27-be99-45fb3f145ddf",
        })).await;
        assert_eq!(StatusCode::OK, status);

        let (status, _) = send_json(&app, "POST", "/borrow/holds", json!({
            "barcode": "86421357",
            "patronId": "018dc74a-4830-75cf-a194-5e9815727b02",
        })).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }
}
