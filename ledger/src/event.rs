//! Ledger events.
//!
//! Every mutating operation appends an event to an internal log that the
//! caller drains ([`crate::Ledger::drain_events`]). A notifier can turn
//! these into notification records or push them to connected clients;
//! ledger correctness never depends on anyone draining the log.

use crate::{BookId, FineId, LoanId, MemberId, ReservationId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Something that happened inside the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    BookIssued {
        loan_id: LoanId,
        book_id: BookId,
        member_id: MemberId,
        due_date: NaiveDate,
    },
    BookReturned {
        loan_id: LoanId,
        book_id: BookId,
        member_id: MemberId,
        fine_charged: f64,
    },
    FineAssessed {
        fine_id: FineId,
        member_id: MemberId,
        amount: f64,
    },
    FinePaid {
        fine_id: FineId,
        member_id: MemberId,
    },
    ReservationPlaced {
        reservation_id: ReservationId,
        book_id: BookId,
        member_id: MemberId,
        priority: u32,
    },
    ReservationCancelled {
        reservation_id: ReservationId,
        book_id: BookId,
    },
}
