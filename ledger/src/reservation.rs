//! Reservation queue entries.

use crate::{BookId, MemberId, ReservationId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Waiting,
    Ready,
    Fulfilled,
    Cancelled,
}

/// A place in the hold queue for a book.
///
/// `priority` is the 1-based queue position at creation time: one more
/// than the number of queued (waiting or ready) reservations the book had
/// at that moment. Cancellations do not renumber later entries, so
/// priorities stay unique per book but may become sparse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub reservation_date: NaiveDate,
    pub status: ReservationStatus,
    pub priority: u32,
}

impl Reservation {
    /// Whether this entry still occupies a queue position.
    pub fn is_queued(&self) -> bool {
        matches!(
            self.status,
            ReservationStatus::Waiting | ReservationStatus::Ready
        )
    }
}
