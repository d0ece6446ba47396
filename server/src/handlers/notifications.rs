//! Notification log handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use stacks_ledger::Notification;

use crate::auth::Staff;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResponse {
    pub read: bool,
}

/// GET /api/notifications - newest first.
pub async fn list_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    let ledger = state.ledger.read().await;
    let mut notifications: Vec<Notification> = ledger.notifications().to_vec();
    notifications.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    Json(notifications)
}

/// POST /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    _staff: Staff,
    Path(id): Path<String>,
) -> Json<MarkReadResponse> {
    let mut ledger = state.ledger.write().await;
    let read = ledger.mark_notification_read(&id);
    drop(ledger);
    if read {
        state.mark_dirty();
    }
    Json(MarkReadResponse { read })
}

/// POST /api/notifications/read-all
pub async fn mark_all_read(State(state): State<AppState>, _staff: Staff) -> StatusCode {
    let mut ledger = state.ledger.write().await;
    ledger.mark_all_notifications_read();
    drop(ledger);
    state.mark_dirty();
    StatusCode::NO_CONTENT
}
