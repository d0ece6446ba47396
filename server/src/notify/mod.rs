//! Live event fan-out and the notification collaborator.
//!
//! The ledger records what happened as [`LedgerEvent`]s; this module
//! drains them, translates the member-facing ones into notification
//! records, and pushes every event to connected WebSocket clients.

mod manager;
mod protocol;
mod websocket;

pub use manager::ConnectionManager;
pub use protocol::*;
pub use websocket::ws_handler;

use chrono::NaiveDate;
use stacks_ledger::{Ledger, LedgerEvent, NewNotification, NotificationKind};

use crate::AppState;

/// Drain the ledger's event log, record notifications and broadcast.
///
/// Called by mutating handlers while still holding the write lock, so
/// notification records land in the same ledger generation as the
/// mutation that caused them.
pub fn publish(state: &AppState, ledger: &mut Ledger) {
    let events = ledger.drain_events();
    if events.is_empty() {
        return;
    }

    record_notifications(ledger, &events, crate::today());

    for event in events {
        state.conn_manager.broadcast_all(ServerMessage::Event { event });
    }
}

/// Translate member-facing events into notification records.
fn record_notifications(ledger: &mut Ledger, events: &[LedgerEvent], today: NaiveDate) {
    for event in events {
        match event {
            LedgerEvent::BookIssued {
                book_id,
                member_id,
                due_date,
                ..
            } => {
                let title = ledger
                    .book(book_id)
                    .map(|b| b.title.clone())
                    .unwrap_or_else(|| book_id.clone());
                ledger.add_notification(NewNotification {
                    kind: NotificationKind::DueReminder,
                    title: "Book due".to_string(),
                    message: format!("\"{}\" is due back on {}", title, due_date),
                    date: today,
                    member_id: Some(member_id.clone()),
                });
            }
            LedgerEvent::FineAssessed {
                member_id, amount, ..
            } => {
                ledger.add_notification(NewNotification {
                    kind: NotificationKind::Fine,
                    title: "Fine assessed".to_string(),
                    message: format!("A fine of {:.2} has been added to your account", amount),
                    date: today,
                    member_id: Some(member_id.clone()),
                });
            }
            // Returns, payments and reservation changes are visible in
            // their own views; no notice needed.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stacks_ledger::{MembershipType, NewBook, NewMember};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn overdue_return_produces_fine_notice() {
        let mut ledger = Ledger::default();
        let b = ledger
            .add_book(NewBook {
                isbn: "978-0-00-000000-0".into(),
                title: "Brave New World".into(),
                author: "Aldous Huxley".into(),
                publisher: "Harper".into(),
                category: "Fiction".into(),
                total_copies: 1,
                location: "Shelf B-09".into(),
                year: 1932,
            })
            .id
            .clone();
        let m = ledger
            .add_member(NewMember {
                name: "David Lee".into(),
                email: "david.l@uni.edu".into(),
                phone: "+1 555-0112".into(),
                department: "Engineering".into(),
                membership_type: MembershipType::Staff,
                join_date: date(2024, 11, 15),
            })
            .id
            .clone();

        let t = ledger.issue_book(&b, &m, date(2026, 2, 5)).unwrap().id.clone();
        ledger.return_book(&t, date(2026, 2, 23)).unwrap();

        let events = ledger.drain_events();
        record_notifications(&mut ledger, &events, date(2026, 2, 23));

        let notifications = ledger.notifications();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].kind, NotificationKind::DueReminder);
        assert!(notifications[0].message.contains("Brave New World"));
        assert_eq!(notifications[1].kind, NotificationKind::Fine);
        assert!(notifications[1].message.contains("4.00"));
        assert_eq!(notifications[1].member_id.as_deref(), Some(m.as_str()));
    }
}
