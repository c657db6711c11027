pub mod events;
pub mod factory;
pub mod in_process;

#[derive(Debug, PartialEq)]
pub(crate) enum GatewayPublisherVia {
    InProcess,
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_create_in_process_via() {
        let _ = GatewayPublisherVia::InProcess;
    }
}
