include!("../../lib.rs");

use std::net::SocketAddr;
use crate::circulation::controller::build_router;
use crate::circulation::factory::create_app_state;
use crate::core::repository::RepositoryStore;
use crate::utils::telemetry::setup_tracing;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), hyper::Error> {
    setup_tracing();

    let branch = std::env::var("BRANCH_ID").unwrap_or_else(|_| "main".to_string());
    let state = create_app_state(branch.as_str(), RepositoryStore::InMemory).await;

    let port = std::env::var("PORT").ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, branch = branch.as_str(), "circulation desk listening");

    axum::Server::bind(&addr)
        .serve(build_router(state).into_make_service())
        .await
}
