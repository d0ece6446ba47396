//! Stacks Server - HTTP and WebSocket surface for the circulation ledger.
//!
//! The ledger itself is pure and single-threaded; this crate wraps it in
//! an `RwLock` so that concurrent HTTP callers get at-most-one-writer
//! semantics per operation, and adds best-effort snapshot persistence.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod notify;
pub mod persist;
pub mod routes;
pub mod seed;

use crate::config::Config;
use crate::notify::ConnectionManager;
use axum::Router;
use chrono::NaiveDate;
use stacks_ledger::Ledger;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub config: Arc<Config>,
    pub conn_manager: Arc<ConnectionManager>,
    /// Present when a data file is configured
    pub persist: Option<persist::PersistHandle>,
}

impl AppState {
    /// Build state around an existing ledger, without persistence.
    pub fn new(ledger: Ledger, config: Config) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            config: Arc::new(config),
            conn_manager: ConnectionManager::new_shared(),
            persist: None,
        }
    }

    /// Signal the persister that ledger state changed.
    ///
    /// Fire-and-forget: a full channel or missing persister is not an
    /// error, and callers never learn whether the write succeeded.
    pub fn mark_dirty(&self) {
        if let Some(persist) = &self.persist {
            let _ = persist.send(());
        }
    }
}

/// The server's notion of "today", in UTC.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Build the application router with middleware attached.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
