use std::sync::Arc;
use crate::gateway::events::HoldEventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::in_process::publisher::InProcessPublisher;

pub(crate) async fn create_publisher(via: GatewayPublisherVia) -> Arc<dyn HoldEventPublisher> {
    match via {
        GatewayPublisherVia::InProcess => {
            Arc::new(InProcessPublisher::new())
        }
    }
}
