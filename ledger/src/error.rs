//! Error types for the Stacks ledger.

use crate::{BookId, FineId, LoanId, MemberId};
use thiserror::Error;

/// All possible errors from the circulation ledger.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    // Lookup errors
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    #[error("member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("loan not found: {0}")]
    LoanNotFound(LoanId),

    #[error("fine not found: {0}")]
    FineNotFound(FineId),

    // Circulation errors
    #[error("no copies of book {0} available")]
    NoCopiesAvailable(BookId),

    #[error("loan already returned: {0}")]
    AlreadyReturned(LoanId),

    #[error("member {0} has reached the loan limit of {1}")]
    LoanLimitReached(MemberId, u32),

    #[error("member {member} is {status}, not active")]
    MemberNotActive { member: MemberId, status: String },

    // Validation errors
    #[error("invalid copy count for book {book}: {available} available of {total} total")]
    InvalidCopyCount {
        book: BookId,
        available: u32,
        total: u32,
    },

    // State errors
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("snapshot format version mismatch: supported up to {supported}, got {actual}")]
    SnapshotVersionMismatch { supported: u32, actual: u32 },
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::BookNotFound("b1".into());
        assert_eq!(err.to_string(), "book not found: b1");

        let err = Error::NoCopiesAvailable("b9".into());
        assert_eq!(err.to_string(), "no copies of book b9 available");

        let err = Error::LoanLimitReached("m1".into(), 5);
        assert_eq!(err.to_string(), "member m1 has reached the loan limit of 5");

        let err = Error::InvalidCopyCount {
            book: "b2".into(),
            available: 7,
            total: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid copy count for book b2: 7 available of 5 total"
        );
    }

    #[test]
    fn not_found_and_invalid_state_are_distinct() {
        // Callers must be able to tell "no such loan" from "already returned".
        let missing = Error::LoanNotFound("t1".into());
        let returned = Error::AlreadyReturned("t1".into());
        assert_ne!(missing, returned);
    }
}
