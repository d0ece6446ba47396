//! Notification log.
//!
//! A parallel, display-oriented log. Ledger operations never populate it
//! implicitly; a notifier subscribed to ledger events may append entries,
//! and callers can add entries directly.

use crate::{MemberId, NotificationId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    DueReminder,
    Overdue,
    ReservationReady,
    Fine,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    pub read: bool,
    /// Target member, if the notice is member-specific
    pub member_id: Option<MemberId>,
}

/// Fields for appending a notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    pub member_id: Option<MemberId>,
}

impl NewNotification {
    pub(crate) fn into_notification(self, id: NotificationId) -> Notification {
        Notification {
            id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            date: self.date,
            read: false,
            member_id: self.member_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notification_starts_unread() {
        let n = NewNotification {
            kind: NotificationKind::Fine,
            title: "Fine assessed".into(),
            message: "2.00 due for an overdue return".into(),
            date: NaiveDate::from_ymd_opt(2026, 2, 21).unwrap(),
            member_id: Some("m1".into()),
        }
        .into_notification("n1".into());

        assert!(!n.read);
        assert_eq!(n.kind, NotificationKind::Fine);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&NotificationKind::ReservationReady).unwrap();
        assert_eq!(json, "\"reservation_ready\"");

        let json = serde_json::to_string(&NotificationKind::DueReminder).unwrap();
        assert_eq!(json, "\"due_reminder\"");
    }
}
