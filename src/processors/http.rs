use crate::domain::payment::ProcessorPayload;
use crate::processors::{PaymentForwarder, ProcessorResponse, TransportError};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpForwarder {
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

impl HttpForwarder {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl PaymentForwarder for HttpForwarder {
    async fn forward(
        &self,
        endpoint: &str,
        payload: &ProcessorPayload,
    ) -> Result<ProcessorResponse, TransportError> {
        let url = format!("{}/payments", endpoint.trim_end_matches('/'));

        // Once a status line arrives the processor has answered; only send() can fail over.
        let resp = self
            .client
            .post(&url)
            .json(payload)
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %url, status, error = %e, "processor body unreadable");
                Default::default()
            }
        };

        tracing::debug!(url = %url, status, "processor answered");

        Ok(ProcessorResponse {
            status,
            content_type,
            body,
        })
    }
}
