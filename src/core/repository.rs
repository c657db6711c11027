use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// The data store backing the repositories. Persistence is an external
// collaborator of the circulation core; the in-memory store is the
// reference implementation and the unit-test fake.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    InMemory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::InMemory => { GatewayPublisherVia::InProcess }
        }
    }
}
