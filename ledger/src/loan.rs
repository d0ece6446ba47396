//! Loan records, spanning issue to return.

use crate::{BookId, LoanId, MemberId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recorded status of a loan.
///
/// The ledger only ever writes `Active` (at issue) and `Returned` (at
/// return). `Overdue` exists so that imported data carrying it round-trips;
/// live overdue detection is derived via [`Loan::status_on`] instead of a
/// stored-status sweep, which cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Overdue,
    Returned,
}

/// A single loan of one copy of a book to a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: LoanId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issue_date: NaiveDate,
    /// issue_date + the policy loan period
    pub due_date: NaiveDate,
    /// Set exactly once, on return
    pub return_date: Option<NaiveDate>,
    /// Fine charged at return; 0 until then
    pub fine: f64,
    pub status: LoanStatus,
}

impl Loan {
    /// Create an active loan issued on `issue_date`.
    pub fn new(
        id: LoanId,
        book_id: BookId,
        member_id: MemberId,
        issue_date: NaiveDate,
        loan_period_days: i64,
    ) -> Self {
        Self {
            id,
            book_id,
            member_id,
            issue_date,
            due_date: issue_date + chrono::Duration::days(loan_period_days),
            return_date: None,
            fine: 0.0,
            status: LoanStatus::Active,
        }
    }

    /// Whether this loan is still open (book not yet back on the shelf).
    pub fn is_open(&self) -> bool {
        self.status != LoanStatus::Returned
    }

    /// Whole days past due as of `on`, never negative.
    ///
    /// Dates are day-granular, so a return within the due day itself counts
    /// as zero days overdue.
    pub fn days_overdue(&self, on: NaiveDate) -> i64 {
        (on - self.due_date).num_days().max(0)
    }

    /// Status as of `on`, deriving overdue from the due date.
    pub fn status_on(&self, on: NaiveDate) -> LoanStatus {
        if !self.is_open() {
            LoanStatus::Returned
        } else if on > self.due_date {
            LoanStatus::Overdue
        } else {
            LoanStatus::Active
        }
    }
}
