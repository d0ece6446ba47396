//! Library members.

use crate::MemberId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Membership tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    Student,
    Faculty,
    Staff,
}

/// Standing of a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Suspended,
    Expired,
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "active"),
            MemberStatus::Suspended => write!(f, "suspended"),
            MemberStatus::Expired => write!(f, "expired"),
        }
    }
}

/// A registered member.
///
/// `books_issued` counts currently open loans and is maintained by the
/// ledger on issue/return. `total_fines` is a rollup of pending fine
/// amounts, likewise maintained at every fine mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub membership_type: MembershipType,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
    pub books_issued: u32,
    pub total_fines: f64,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

/// Fields for registering a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub membership_type: MembershipType,
    pub join_date: NaiveDate,
}

impl NewMember {
    pub(crate) fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            department: self.department,
            membership_type: self.membership_type,
            join_date: self.join_date,
            status: MemberStatus::Active,
            books_issued: 0,
            total_fines: 0.0,
        }
    }
}

/// Partial update for a member; `None` fields are left unchanged.
///
/// The loan and fine counters are ledger-maintained and deliberately
/// absent here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub membership_type: Option<MembershipType>,
    pub status: Option<MemberStatus>,
}

impl MemberPatch {
    pub(crate) fn apply_to(&self, member: &Member) -> Member {
        let mut updated = member.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(email) = &self.email {
            updated.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            updated.phone = phone.clone();
        }
        if let Some(department) = &self.department {
            updated.department = department.clone();
        }
        if let Some(membership_type) = self.membership_type {
            updated.membership_type = membership_type;
        }
        if let Some(status) = self.status {
            updated.status = status;
        }
        updated
    }
}
