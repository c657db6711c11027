use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::items::repository::ItemRepository;

// The item repository is injected rather than created here so the catalog
// and the circulation desk observe the same store.
pub(crate) async fn create_catalog_service(config: &Configuration,
                                           item_repository: Arc<dyn ItemRepository>) -> Arc<dyn CatalogService> {
    Arc::new(CatalogServiceImpl::new(config, item_repository))
}
