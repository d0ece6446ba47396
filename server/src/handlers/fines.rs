//! Fine handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use stacks_ledger::Fine;

use crate::auth::Staff;
use crate::error::{AppError, Result};
use crate::{notify, today, AppState};

/// Request body for a manually entered fine.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFineRequest {
    pub member_id: String,
    pub amount: f64,
    pub reason: String,
}

/// GET /api/fines - all fines, newest first.
pub async fn list_fines(State(state): State<AppState>) -> Json<Vec<Fine>> {
    let ledger = state.ledger.read().await;
    let mut fines: Vec<Fine> = ledger.fines().cloned().collect();
    fines.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    Json(fines)
}

/// POST /api/fines - record a fine not tied to a loan.
pub async fn create_fine(
    State(state): State<AppState>,
    _staff: Staff,
    Json(request): Json<NewFineRequest>,
) -> Result<(StatusCode, Json<Fine>)> {
    if request.amount <= 0.0 {
        return Err(AppError::BadRequest(
            "fine amount must be positive".to_string(),
        ));
    }

    let mut ledger = state.ledger.write().await;
    let fine = ledger
        .add_fine(&request.member_id, request.amount, &request.reason, today())?
        .clone();
    notify::publish(&state, &mut ledger);
    drop(ledger);
    state.mark_dirty();

    Ok((StatusCode::CREATED, Json(fine)))
}

/// POST /api/fines/{id}/pay - idempotent.
pub async fn pay_fine(
    State(state): State<AppState>,
    _staff: Staff,
    Path(id): Path<String>,
) -> Result<Json<Fine>> {
    let mut ledger = state.ledger.write().await;
    let fine = ledger.pay_fine(&id)?.clone();
    notify::publish(&state, &mut ledger);
    drop(ledger);
    state.mark_dirty();

    Ok(Json(fine))
}
