use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

pub async fn create_payment(State(state): State<AppState>, body: Bytes) -> Response {
    match state.payment_router.handle(&body).await {
        Ok(relayed) => relayed.into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "payment rejected");
            e.into_response()
        }
    }
}
