//! Membership handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use stacks_ledger::{Error, Member, MemberPatch, NewMember};

use crate::auth::Staff;
use crate::error::Result;
use crate::AppState;

/// Member plus the drift-proof fine total recomputed from the fines
/// collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    #[serde(flatten)]
    pub member: Member,
    pub outstanding_fines: f64,
}

/// GET /api/members - ordered by name.
pub async fn list_members(State(state): State<AppState>) -> Json<Vec<Member>> {
    let ledger = state.ledger.read().await;
    let mut members: Vec<Member> = ledger.members().cloned().collect();
    members.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    Json(members)
}

/// GET /api/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MemberProfile>> {
    let ledger = state.ledger.read().await;
    let member = ledger
        .member(&id)
        .cloned()
        .ok_or(Error::MemberNotFound(id.clone()))?;
    let outstanding_fines = ledger.outstanding_fines(&id);
    Ok(Json(MemberProfile {
        member,
        outstanding_fines,
    }))
}

/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    _staff: Staff,
    Json(new): Json<NewMember>,
) -> (StatusCode, Json<Member>) {
    let mut ledger = state.ledger.write().await;
    let member = ledger.add_member(new).clone();
    drop(ledger);
    state.mark_dirty();

    tracing::info!(member_id = %member.id, "Member registered");
    (StatusCode::CREATED, Json(member))
}

/// PATCH /api/members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    _staff: Staff,
    Path(id): Path<String>,
    Json(patch): Json<MemberPatch>,
) -> Result<Json<Member>> {
    let mut ledger = state.ledger.write().await;
    let member = ledger.update_member(&id, patch)?.clone();
    drop(ledger);
    state.mark_dirty();

    Ok(Json(member))
}
