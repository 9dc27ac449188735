use crate::domain::payment::{Destination, PaymentRecord, PaymentRequest, ProcessorPayload};
use crate::error::RouteError;
use crate::ledger::Ledger;
use crate::processors::{PaymentForwarder, ProcessorResponse};
use crate::service::failover::{classify_fallback, classify_primary, FailoverDirective};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// What goes back to the caller after a processor answered.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayedResponse {
    pub destination: Destination,
    pub response: ProcessorResponse,
}

impl IntoResponse for RelayedResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.response.status).unwrap_or(StatusCode::BAD_GATEWAY);
        let mut resp = (status, self.response.body).into_response();
        match self
            .response
            .content_type
            .as_deref()
            .and_then(|ct| HeaderValue::from_str(ct).ok())
        {
            Some(ct) => {
                resp.headers_mut().insert(header::CONTENT_TYPE, ct);
            }
            None => {
                resp.headers_mut().remove(header::CONTENT_TYPE);
            }
        }
        resp
    }
}

/// Sends each payment to the default processor, fails over to the fallback once,
/// and records accepted payments in the ledger.
#[derive(Clone)]
pub struct PaymentRouter {
    pub forwarder: Arc<dyn PaymentForwarder>,
    pub ledger: Ledger,
    pub default_url: String,
    pub fallback_url: String,
}

impl PaymentRouter {
    pub fn new(
        forwarder: Arc<dyn PaymentForwarder>,
        ledger: Ledger,
        default_url: impl Into<String>,
        fallback_url: impl Into<String>,
    ) -> Self {
        Self {
            forwarder,
            ledger,
            default_url: default_url.into(),
            fallback_url: fallback_url.into(),
        }
    }

    pub async fn handle(&self, body: &[u8]) -> Result<RelayedResponse, RouteError> {
        let (correlation_id, req) = validate_request(body)?;
        let payload = ProcessorPayload::from(&req);

        let primary = self.forwarder.forward(&self.default_url, &payload).await;
        let (destination, directive) = match classify_primary(primary) {
            FailoverDirective::Failover(reason) => {
                tracing::warn!(
                    correlation_id = %correlation_id,
                    reason = %reason,
                    "default processor failed, trying fallback"
                );
                let fallback = self.forwarder.forward(&self.fallback_url, &payload).await;
                (Destination::Fallback, classify_fallback(fallback))
            }
            directive => (Destination::Default, directive),
        };

        let response = match directive {
            FailoverDirective::Accept(response) => response,
            FailoverDirective::Failover(reason) | FailoverDirective::FailNow(reason) => {
                tracing::error!(
                    correlation_id = %correlation_id,
                    reason = %reason,
                    "both processors failed"
                );
                return Err(RouteError::ProcessorsUnavailable);
            }
        };

        self.ledger.append(PaymentRecord {
            correlation_id,
            amount: req.amount,
            timestamp: Utc::now(),
            destination,
        });

        tracing::debug!(
            correlation_id = %correlation_id,
            destination = %destination,
            status = response.status,
            "payment relayed"
        );

        Ok(RelayedResponse {
            destination,
            response,
        })
    }
}

fn validate_request(body: &[u8]) -> Result<(Uuid, PaymentRequest), RouteError> {
    let req: PaymentRequest =
        serde_json::from_slice(body).map_err(|_| RouteError::InvalidBody)?;
    let correlation_id =
        Uuid::parse_str(&req.correlation_id).map_err(|_| RouteError::InvalidCorrelationId)?;
    Ok((correlation_id, req))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_json() {
        assert_eq!(
            validate_request(b"{not json").unwrap_err(),
            RouteError::InvalidBody
        );
    }

    #[test]
    fn rejects_missing_correlation_id() {
        assert_eq!(
            validate_request(br#"{"amount": 10}"#).unwrap_err(),
            RouteError::InvalidCorrelationId
        );
    }

    #[test]
    fn keeps_non_positive_amounts() {
        let (_, req) = validate_request(
            br#"{"correlationId":"3fa85f64-5717-4562-b3fc-2c963f66afa6","amount":-5}"#,
        )
        .unwrap();
        assert_eq!(req.amount, -5.0);
    }
}
