use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use crate::core::events::CirculationEvent;
use crate::core::library::CirculationResult;
use crate::gateway::events::{CirculationEventHandler, HoldEventPublisher};

// InProcessPublisher dispatches each event synchronously to every
// subscriber before the publishing command returns. Subscribers are
// registered once at wiring time.
pub(crate) struct InProcessPublisher {
    subscribers: RwLock<Vec<Arc<dyn CirculationEventHandler>>>,
}

impl InProcessPublisher {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HoldEventPublisher for InProcessPublisher {
    async fn subscribe(&self, subscriber: Arc<dyn CirculationEventHandler>) {
        self.subscribers.write().await.push(subscriber);
    }

    async fn publish(&self, event: &CirculationEvent) -> CirculationResult<CirculationEvent> {
        let subscribers = self.subscribers.read().await.clone();
        debug!(name = event.name(), barcode = event.barcode(), "dispatching circulation event");
        for subscriber in subscribers.iter() {
            subscriber.handle(event).await?;
        }
        Ok(event.clone())
    }
}
