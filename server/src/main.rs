//! Stacks Server - circulation server for library management.
//!
//! Serves the circulation ledger over HTTP and WebSocket: catalog,
//! membership, loans, reservations, fines, notifications, dashboard
//! stats and state export/import.

use stacks_ledger::{CirculationPolicy, Ledger};
use stacks_server::config::Config;
use stacks_server::{create_app, persist, seed, today, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stacks_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Stacks Server on {}:{}", config.host, config.port);

    // Restore persisted state, or seed the demo library.
    let mut ledger = Ledger::new(CirculationPolicy::default());
    let mut restored = false;
    if let Some(path) = &config.data_file {
        if let Some(snapshot) = persist::load(path).await {
            match ledger.import_state(snapshot) {
                Ok(()) => restored = true,
                Err(e) => tracing::warn!("Discarding unusable snapshot: {}", e),
            }
        }
    }
    if !restored && config.seed_demo {
        seed::seed_demo(&mut ledger, today());
    }

    // Build application state
    let mut state = AppState::new(ledger, config.clone());
    if let Some(path) = &config.data_file {
        state.persist = Some(persist::spawn(state.ledger.clone(), path.clone()));
    }

    // Build router
    let app = create_app(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
