use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

/// The ledger lives in process memory, so an answering process is always ready.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "ready": true,
        "ledger_records": state.ledger.len(),
    }))
}

pub async fn liveness() -> impl IntoResponse {
    Json(json!({
        "alive": true,
        "service": env!("CARGO_PKG_NAME"),
    }))
}
