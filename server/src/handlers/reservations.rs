//! Reservation handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use stacks_ledger::Reservation;

use crate::auth::Staff;
use crate::{notify, today, AppState};

/// Request body for placing a hold.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRequest {
    pub book_id: String,
    pub member_id: String,
}

/// Filter for listing reservations.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationQuery {
    /// Restrict to one book's live queue
    pub book_id: Option<String>,
}

/// Response for a cancellation; absent ids are a no-op, not an error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub cancelled: bool,
}

/// GET /api/reservations
///
/// With `?bookId=`, returns that book's live queue in priority order;
/// otherwise all reservations ordered by date.
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationQuery>,
) -> Json<Vec<Reservation>> {
    let ledger = state.ledger.read().await;
    let reservations = match &query.book_id {
        Some(book_id) => ledger
            .reservation_queue(book_id)
            .into_iter()
            .cloned()
            .collect(),
        None => {
            let mut all: Vec<Reservation> = ledger.reservations().cloned().collect();
            all.sort_by(|a, b| {
                a.reservation_date
                    .cmp(&b.reservation_date)
                    .then_with(|| a.id.cmp(&b.id))
            });
            all
        }
    };
    Json(reservations)
}

/// POST /api/reservations - place a hold.
pub async fn create_reservation(
    State(state): State<AppState>,
    _staff: Staff,
    Json(request): Json<ReserveRequest>,
) -> (StatusCode, Json<Reservation>) {
    let mut ledger = state.ledger.write().await;
    let reservation = ledger
        .reserve_book(&request.book_id, &request.member_id, today())
        .clone();
    notify::publish(&state, &mut ledger);
    drop(ledger);
    state.mark_dirty();

    tracing::info!(
        reservation_id = %reservation.id,
        book_id = %reservation.book_id,
        priority = reservation.priority,
        "Reservation placed"
    );
    (StatusCode::CREATED, Json(reservation))
}

/// POST /api/reservations/{id}/cancel
pub async fn cancel_reservation(
    State(state): State<AppState>,
    _staff: Staff,
    Path(id): Path<String>,
) -> Json<CancelResponse> {
    let mut ledger = state.ledger.write().await;
    let cancelled = ledger.cancel_reservation(&id);
    notify::publish(&state, &mut ledger);
    drop(ledger);
    if cancelled {
        state.mark_dirty();
    }

    Json(CancelResponse { cancelled })
}
