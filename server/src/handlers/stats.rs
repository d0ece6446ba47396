//! Dashboard statistics.

use axum::extract::State;
use axum::Json;
use stacks_ledger::LedgerSummary;

use crate::{today, AppState};

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<LedgerSummary> {
    let ledger = state.ledger.read().await;
    Json(ledger.summary(today()))
}
