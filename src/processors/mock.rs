use crate::domain::payment::ProcessorPayload;
use crate::processors::{PaymentForwarder, ProcessorResponse, TransportError};
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    Respond { status: u16, body: String },
    Unreachable,
    Timeout,
}

/// Scripted processors keyed by endpoint, for tests. Unknown endpoints are unreachable.
#[derive(Default)]
pub struct MockForwarder {
    behaviors: HashMap<String, MockBehavior>,
    calls: Mutex<Vec<(String, ProcessorPayload)>>,
}

impl MockForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, endpoint: &str, behavior: MockBehavior) -> Self {
        self.behaviors.insert(endpoint.to_string(), behavior);
        self
    }

    pub fn responding(self, endpoint: &str, status: u16, body: &str) -> Self {
        self.with(
            endpoint,
            MockBehavior::Respond {
                status,
                body: body.to_string(),
            },
        )
    }

    /// Endpoints hit so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(e, _)| e.clone()).collect()
    }

    pub fn payloads(&self) -> Vec<ProcessorPayload> {
        self.calls.lock().iter().map(|(_, p)| p.clone()).collect()
    }
}

#[async_trait::async_trait]
impl PaymentForwarder for MockForwarder {
    async fn forward(
        &self,
        endpoint: &str,
        payload: &ProcessorPayload,
    ) -> Result<ProcessorResponse, TransportError> {
        self.calls
            .lock()
            .push((endpoint.to_string(), payload.clone()));

        match self.behaviors.get(endpoint) {
            Some(MockBehavior::Respond { status, body }) => Ok(ProcessorResponse {
                status: *status,
                content_type: Some("application/json".to_string()),
                body: body.clone().into(),
            }),
            Some(MockBehavior::Timeout) => Err(TransportError::Timeout),
            Some(MockBehavior::Unreachable) | None => Err(TransportError::Connect(format!(
                "mock endpoint {endpoint} is down"
            ))),
        }
    }
}
