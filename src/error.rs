use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid json")]
    InvalidBody,
    #[error("invalid correlationId")]
    InvalidCorrelationId,
    #[error("invalid {param}")]
    InvalidTimestamp { param: &'static str },
    #[error("processor error")]
    ProcessorsUnavailable,
}

impl RouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::InvalidBody
            | RouteError::InvalidCorrelationId
            | RouteError::InvalidTimestamp { .. } => StatusCode::BAD_REQUEST,
            RouteError::ProcessorsUnavailable => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
