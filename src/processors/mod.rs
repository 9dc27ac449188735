use crate::domain::payment::ProcessorPayload;
use axum::body::Bytes;

pub mod http;
pub mod mock;

/// Raw answer from a processor, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl ProcessorResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// The processor could not be reached or did not answer in time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("processor timed out")]
    Timeout,
    #[error("processor unreachable: {0}")]
    Connect(String),
    #[error("processor transport failure: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Other(e.to_string())
        }
    }
}

/// Issues one `POST {endpoint}/payments`. Never retries; failover belongs to the caller.
#[async_trait::async_trait]
pub trait PaymentForwarder: Send + Sync {
    async fn forward(
        &self,
        endpoint: &str,
        payload: &ProcessorPayload,
    ) -> Result<ProcessorResponse, TransportError>;
}
