pub mod config;
pub mod domain {
    pub mod payment;
}
pub mod error;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod payments;
        pub mod summary;
    }
    pub mod routes;
}
pub mod ledger;
pub mod processors;
pub mod service {
    pub mod failover;
    pub mod payment_router;
}

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub payment_router: service::payment_router::PaymentRouter,
    pub ledger: ledger::Ledger,
}

impl AppState {
    /// Wires a fresh ledger and router around `forwarder`.
    pub fn new(
        cfg: &config::AppConfig,
        forwarder: Arc<dyn processors::PaymentForwarder>,
    ) -> Self {
        let ledger = ledger::Ledger::new();
        let payment_router = service::payment_router::PaymentRouter::new(
            forwarder,
            ledger.clone(),
            cfg.default_url.clone(),
            cfg.fallback_url.clone(),
        );
        Self {
            payment_router,
            ledger,
        }
    }
}
