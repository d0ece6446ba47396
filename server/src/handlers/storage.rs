//! State export and import.
//!
//! The export bundle is one JSON object with each collection under its
//! unprefixed name, the shape the snapshot format serializes natively.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stacks_ledger::LedgerSnapshot;

use crate::auth::Staff;
use crate::error::Result;
use crate::AppState;

/// GET /api/export - the full ledger state as one bundle.
pub async fn export_state(State(state): State<AppState>) -> Json<LedgerSnapshot> {
    let ledger = state.ledger.read().await;
    Json(ledger.export_state())
}

/// POST /api/import - replace ledger state from a bundle.
///
/// Import is all-or-nothing: an invalid bundle is rejected and the
/// current state survives untouched.
pub async fn import_state(
    State(state): State<AppState>,
    _staff: Staff,
    Json(snapshot): Json<LedgerSnapshot>,
) -> Result<StatusCode> {
    let record_count = snapshot.record_count();

    let mut ledger = state.ledger.write().await;
    ledger.import_state(snapshot)?;
    drop(ledger);
    state.mark_dirty();

    tracing::info!(records = record_count, "Ledger state imported");
    Ok(StatusCode::NO_CONTENT)
}
