use std::sync::Arc;
use crate::catalog::factory::create_catalog_service;
use crate::circulation::domain::CirculationService;
use crate::circulation::domain::service::CirculationDesk;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::events::HoldEventPublisher;
use crate::gateway::factory::create_publisher;
use crate::holds::factory::create_hold_repository;
use crate::holds::repository::HoldRepository;
use crate::items::factory::create_item_repository;
use crate::items::repository::ItemRepository;

// The desk subscribes to the publisher it hands its own events to; that
// subscription is what closes the hold -> item consistency loop.
pub(crate) async fn wire_circulation_service(config: &Configuration,
                                             item_repository: Arc<dyn ItemRepository>,
                                             hold_repository: Arc<dyn HoldRepository>,
                                             publisher: Arc<dyn HoldEventPublisher>) -> Arc<dyn CirculationService> {
    let desk = Arc::new(CirculationDesk::new(config, item_repository, hold_repository, publisher.clone()));
    publisher.subscribe(desk.clone()).await;
    desk
}

pub(crate) async fn create_circulation_service(config: &Configuration,
                                               store: RepositoryStore) -> Arc<dyn CirculationService> {
    let item_repository = create_item_repository(store).await;
    let hold_repository = create_hold_repository(store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    wire_circulation_service(config, item_repository, hold_repository, publisher).await
}

pub(crate) async fn create_app_state(branch: &str, store: RepositoryStore) -> AppState {
    let config = Configuration::new(branch);
    let item_repository = create_item_repository(store).await;
    let hold_repository = create_hold_repository(store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    let catalog_service = create_catalog_service(&config, item_repository.clone()).await;
    let circulation_service = wire_circulation_service(
        &config, item_repository, hold_repository, publisher).await;
    AppState::new(&config, catalog_service, circulation_service)
}
