use payments_router::config::AppConfig;
use payments_router::http::routes::router;
use payments_router::processors::http::HttpForwarder;
use payments_router::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = AppConfig::from_env();

    let forwarder = Arc::new(HttpForwarder::new(cfg.processor_timeout_ms));
    let state = AppState::new(&cfg, forwarder);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(
        bind_addr = %cfg.bind_addr,
        default_url = %cfg.default_url,
        fallback_url = %cfg.fallback_url,
        timeout_ms = cfg.processor_timeout_ms,
        "listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
