use crate::http::handlers::{ops, payments, summary};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness))
        .route("/payments", post(payments::create_payment))
        .route("/payments-summary", get(summary::payments_summary))
        .with_state(state)
}
