//! Circulation policy constants.
//!
//! Fixed at ledger construction and never mutated at runtime.

use serde::{Deserialize, Serialize};

/// Circulation rules applied by the ledger.
///
/// The defaults mirror a small academic library: a two-week loan period
/// and a flat per-day overdue rate. The two `enforce_*` switches gate
/// rules that exist as constants but are traditionally left unenforced
/// at the issue desk; both default to off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CirculationPolicy {
    /// Fine accrued per overdue day, in currency units
    pub fine_per_day: f64,
    /// Loan period in days; due date = issue date + this
    pub loan_period_days: i64,
    /// Maximum concurrent open loans per member
    pub max_books_per_member: u32,
    /// Reject issues to members already at the loan cap
    pub enforce_loan_limit: bool,
    /// Reject issues to suspended or expired members
    pub enforce_member_status: bool,
}

impl Default for CirculationPolicy {
    fn default() -> Self {
        Self {
            fine_per_day: 1.00,
            loan_period_days: 14,
            max_books_per_member: 5,
            enforce_loan_limit: false,
            enforce_member_status: false,
        }
    }
}

impl CirculationPolicy {
    /// Policy with both enforcement switches turned on.
    pub fn strict() -> Self {
        Self {
            enforce_loan_limit: true,
            enforce_member_status: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy() {
        let policy = CirculationPolicy::default();
        assert_eq!(policy.fine_per_day, 1.00);
        assert_eq!(policy.loan_period_days, 14);
        assert_eq!(policy.max_books_per_member, 5);
        assert!(!policy.enforce_loan_limit);
        assert!(!policy.enforce_member_status);
    }

    #[test]
    fn strict_policy() {
        let policy = CirculationPolicy::strict();
        assert!(policy.enforce_loan_limit);
        assert!(policy.enforce_member_status);
        assert_eq!(policy.loan_period_days, 14);
    }

    #[test]
    fn serialization_roundtrip() {
        let policy = CirculationPolicy::default();
        let json = serde_json::to_string(&policy).unwrap();
        assert!(json.contains("finePerDay"));
        let parsed: CirculationPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, parsed);
    }
}
