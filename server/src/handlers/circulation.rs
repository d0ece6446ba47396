//! Circulation handlers: issuing and returning books.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use stacks_ledger::{Loan, ReturnReceipt};

use crate::auth::Staff;
use crate::error::Result;
use crate::{notify, today, AppState};

/// Request body for issuing a book.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRequest {
    pub book_id: String,
    pub member_id: String,
}

/// POST /api/loans - issue a book to a member.
pub async fn issue_book(
    State(state): State<AppState>,
    _staff: Staff,
    Json(request): Json<IssueRequest>,
) -> Result<(StatusCode, Json<Loan>)> {
    let mut ledger = state.ledger.write().await;
    let loan = ledger
        .issue_book(&request.book_id, &request.member_id, today())?
        .clone();
    notify::publish(&state, &mut ledger);
    drop(ledger);
    state.mark_dirty();

    tracing::info!(
        loan_id = %loan.id,
        book_id = %loan.book_id,
        member_id = %loan.member_id,
        due = %loan.due_date,
        "Book issued"
    );
    Ok((StatusCode::CREATED, Json(loan)))
}

/// POST /api/loans/{id}/return - return the book on a loan.
pub async fn return_book(
    State(state): State<AppState>,
    _staff: Staff,
    Path(id): Path<String>,
) -> Result<Json<ReturnReceipt>> {
    let mut ledger = state.ledger.write().await;
    let receipt = ledger.return_book(&id, today())?;
    notify::publish(&state, &mut ledger);
    drop(ledger);
    state.mark_dirty();

    if receipt.fine_charged > 0.0 {
        tracing::info!(
            loan_id = %receipt.loan_id,
            days_overdue = receipt.days_overdue,
            fine = receipt.fine_charged,
            "Overdue return, fine assessed"
        );
    }
    Ok(Json(receipt))
}

/// GET /api/loans - all loans, most recent first, with derived statuses.
pub async fn list_loans(State(state): State<AppState>) -> Json<Vec<Loan>> {
    let now = today();
    let ledger = state.ledger.read().await;
    let mut loans: Vec<Loan> = ledger
        .loans()
        .map(|loan| {
            let mut view = loan.clone();
            view.status = loan.status_on(now);
            view
        })
        .collect();
    loans.sort_by(|a, b| {
        b.issue_date
            .cmp(&a.issue_date)
            .then_with(|| b.id.cmp(&a.id))
    });
    Json(loans)
}

/// GET /api/loans/overdue - open loans past their due date.
pub async fn list_overdue(State(state): State<AppState>) -> Json<Vec<Loan>> {
    let now = today();
    let ledger = state.ledger.read().await;
    let mut loans: Vec<Loan> = ledger
        .overdue_loans(now)
        .into_iter()
        .map(|loan| {
            let mut view = loan.clone();
            view.status = loan.status_on(now);
            view
        })
        .collect();
    loans.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));
    Json(loans)
}
