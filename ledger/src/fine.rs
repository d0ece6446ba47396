//! Fine records.

use crate::{FineId, LoanId, MemberId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reason string used for fines assessed at return time.
pub const OVERDUE_RETURN_REASON: &str = "Overdue return";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FineStatus {
    Pending,
    Paid,
}

/// A monetary penalty against a member.
///
/// `loan_id` is present for fines derived from an overdue return and
/// absent for manually entered ones (a lost book, for example).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    pub id: FineId,
    pub member_id: MemberId,
    pub loan_id: Option<LoanId>,
    pub amount: f64,
    pub reason: String,
    pub status: FineStatus,
    pub date: NaiveDate,
}

impl Fine {
    pub fn is_pending(&self) -> bool {
        self.status == FineStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_predicate() {
        let mut fine = Fine {
            id: "f1".into(),
            member_id: "m1".into(),
            loan_id: Some("t1".into()),
            amount: 2.0,
            reason: OVERDUE_RETURN_REASON.into(),
            status: FineStatus::Pending,
            date: NaiveDate::from_ymd_opt(2026, 2, 21).unwrap(),
        };
        assert!(fine.is_pending());

        fine.status = FineStatus::Paid;
        assert!(!fine.is_pending());
    }

    #[test]
    fn manual_fine_has_no_loan() {
        let fine = Fine {
            id: "f2".into(),
            member_id: "m1".into(),
            loan_id: None,
            amount: 15.0,
            reason: "Lost book".into(),
            status: FineStatus::Pending,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        };

        let json = serde_json::to_string(&fine).unwrap();
        assert!(json.contains("\"loanId\":null"));

        let parsed: Fine = serde_json::from_str(&json).unwrap();
        assert_eq!(fine, parsed);
    }
}
