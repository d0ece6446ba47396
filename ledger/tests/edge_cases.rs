//! Edge case tests for stacks-ledger
//!
//! These tests cover boundary conditions, unusual inputs, and the full
//! circulation lifecycle end to end.

use chrono::NaiveDate;
use stacks_ledger::{
    BookPatch, CirculationPolicy, Error, FineStatus, Ledger, LedgerSnapshot, LoanStatus,
    MembershipType, NewBook, NewMember, OVERDUE_RETURN_REASON,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book(title: &str, copies: u32) -> NewBook {
    NewBook {
        isbn: "978-0-00-000000-0".into(),
        title: title.into(),
        author: "Author".into(),
        publisher: "Press".into(),
        category: "Fiction".into(),
        total_copies: copies,
        location: "Shelf A-1".into(),
        year: 2001,
    }
}

fn member(name: &str) -> NewMember {
    NewMember {
        name: name.into(),
        email: "someone@uni.edu".into(),
        phone: "+1 555-0100".into(),
        department: "History".into(),
        membership_type: MembershipType::Student,
        join_date: date(2025, 9, 1),
    }
}

// ============================================================================
// End-to-end circulation scenarios
// ============================================================================

#[test]
fn two_copy_lifecycle() {
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("Dune", 2)).id.clone();
    let m1 = ledger.add_member(member("M1")).id.clone();
    let m2 = ledger.add_member(member("M2")).id.clone();
    let issued = date(2026, 2, 5);

    // Issue to M1: one copy left, active loan due issue + 14d.
    let t1 = ledger.issue_book(&b, &m1, issued).unwrap().id.clone();
    assert_eq!(ledger.book(&b).unwrap().available_copies, 1);
    let loan = ledger.loan(&t1).unwrap();
    assert_eq!(loan.status, LoanStatus::Active);
    assert_eq!(loan.due_date, date(2026, 2, 19));

    // Issue to M2: shelf empty.
    ledger.issue_book(&b, &m2, issued).unwrap();
    assert_eq!(ledger.book(&b).unwrap().available_copies, 0);

    // Third issue rejected, nothing changes.
    assert!(matches!(
        ledger.issue_book(&b, &m1, issued),
        Err(Error::NoCopiesAvailable(_))
    ));
    assert_eq!(ledger.book(&b).unwrap().available_copies, 0);

    // Return T1 on time: copy back, loan closed, no fine anywhere.
    let receipt = ledger.return_book(&t1, date(2026, 2, 15)).unwrap();
    assert_eq!(receipt.fine_charged, 0.0);
    assert_eq!(ledger.book(&b).unwrap().available_copies, 1);
    assert_eq!(ledger.loan(&t1).unwrap().status, LoanStatus::Returned);
    assert_eq!(ledger.fines().count(), 0);

    // Returning T1 again is rejected and does not refund availability.
    assert!(matches!(
        ledger.return_book(&t1, date(2026, 2, 16)),
        Err(Error::AlreadyReturned(_))
    ));
    assert_eq!(ledger.book(&b).unwrap().available_copies, 1);
}

#[test]
fn overdue_return_assesses_exact_fine() {
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("Cosmos", 1)).id.clone();
    let m = ledger.add_member(member("Sophie Turner")).id.clone();

    // Due 2026-02-19, returned 2026-02-21 at 1.00/day.
    let t = ledger.issue_book(&b, &m, date(2026, 2, 5)).unwrap().id.clone();
    let receipt = ledger.return_book(&t, date(2026, 2, 21)).unwrap();

    assert_eq!(receipt.days_overdue, 2);
    assert_eq!(receipt.fine_charged, 2.00);

    let fine = ledger.fine(&receipt.fine_id.unwrap()).unwrap();
    assert_eq!(fine.amount, 2.00);
    assert_eq!(fine.status, FineStatus::Pending);
    assert_eq!(fine.reason, OVERDUE_RETURN_REASON);
}

#[test]
fn return_before_due_date_never_goes_negative() {
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("Meditations", 1)).id.clone();
    let m = ledger.add_member(member("Anna")).id.clone();

    let t = ledger.issue_book(&b, &m, date(2026, 2, 5)).unwrap().id.clone();
    let receipt = ledger.return_book(&t, date(2026, 2, 6)).unwrap();
    assert_eq!(receipt.fine_charged, 0.0);
    assert_eq!(receipt.days_overdue, 0);
}

#[test]
fn conservation_over_interleaved_issues_and_returns() {
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("Sapiens", 6)).id.clone();
    let m = ledger.add_member(member("Raj")).id.clone();
    let today = date(2026, 3, 1);

    // 4 issues, 2 returns: available = 6 - (4 - 2).
    let mut open = Vec::new();
    for _ in 0..4 {
        open.push(ledger.issue_book(&b, &m, today).unwrap().id.clone());
    }
    for t in open.drain(..2) {
        ledger.return_book(&t, today).unwrap();
    }
    assert_eq!(ledger.book(&b).unwrap().available_copies, 4);
    assert_eq!(ledger.member(&m).unwrap().books_issued, 2);
}

// ============================================================================
// String edge cases
// ============================================================================

#[test]
fn unicode_titles_and_names() {
    let mut ledger = Ledger::default();
    let titles = vec![
        "日本語テスト",
        "Привет мир",
        "مرحبا بالعالم",
        "🎉🚀💯",
        "Hello\nWorld\tTab",
    ];

    let m = ledger.add_member(member("成田 悠輔")).id.clone();
    for (i, title) in titles.iter().enumerate() {
        let b = ledger.add_book(book(title, 1)).id.clone();
        let stored = ledger.book(&b).unwrap();
        assert_eq!(stored.title, *title, "failed for: {}", title);

        let t = ledger
            .issue_book(&b, &m, date(2026, 2, 1 + i as u32))
            .unwrap()
            .id
            .clone();
        ledger.return_book(&t, date(2026, 2, 2 + i as u32)).unwrap();
    }
}

#[test]
fn empty_strings_are_stored_verbatim() {
    let mut ledger = Ledger::default();
    let b = ledger
        .add_book(NewBook {
            isbn: "".into(),
            title: "".into(),
            author: "".into(),
            publisher: "".into(),
            category: "".into(),
            total_copies: 1,
            location: "".into(),
            year: 0,
        })
        .id
        .clone();
    assert_eq!(ledger.book(&b).unwrap().title, "");
}

// ============================================================================
// Numeric edge cases
// ============================================================================

#[test]
fn zero_copy_book_is_never_issuable() {
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("Rare Manuscript", 0)).id.clone();
    let m = ledger.add_member(member("Kevin")).id.clone();

    assert!(!ledger.book(&b).unwrap().is_available());
    assert!(matches!(
        ledger.issue_book(&b, &m, date(2026, 2, 5)),
        Err(Error::NoCopiesAvailable(_))
    ));
}

#[test]
fn ancient_publication_years() {
    let mut ledger = Ledger::default();
    // The Art of War, circa 500 BCE.
    let b = ledger
        .add_book(NewBook {
            year: -500,
            ..book("The Art of War", 5)
        })
        .id
        .clone();
    assert_eq!(ledger.book(&b).unwrap().year, -500);
}

#[test]
fn very_long_overdue_fine() {
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("1984", 1)).id.clone();
    let m = ledger.add_member(member("Winston")).id.clone();

    let t = ledger.issue_book(&b, &m, date(2020, 1, 1)).unwrap().id.clone();
    // Due 2020-01-15, returned 2026-01-15: 2192 days late (incl. leaps).
    let receipt = ledger.return_book(&t, date(2026, 1, 15)).unwrap();
    assert_eq!(receipt.days_overdue, 2192);
    assert_eq!(receipt.fine_charged, 2192.0);
}

#[test]
fn fractional_fine_rate() {
    let mut ledger = Ledger::new(CirculationPolicy {
        fine_per_day: 0.50,
        ..CirculationPolicy::default()
    });
    let b = ledger.add_book(book("Zero to One", 1)).id.clone();
    let m = ledger.add_member(member("Peter")).id.clone();

    let t = ledger.issue_book(&b, &m, date(2026, 2, 5)).unwrap().id.clone();
    let receipt = ledger.return_book(&t, date(2026, 2, 22)).unwrap();
    assert_eq!(receipt.days_overdue, 3);
    assert_eq!(receipt.fine_charged, 1.50);
}

// ============================================================================
// Reservation queue edge cases
// ============================================================================

#[test]
fn queue_positions_survive_mixed_cancellations() {
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("Design Patterns", 1)).id.clone();
    let members: Vec<String> = (0..4)
        .map(|i| ledger.add_member(member(&format!("M{}", i))).id.clone())
        .collect();
    let today = date(2026, 2, 5);

    let r: Vec<String> = members
        .iter()
        .map(|m| ledger.reserve_book(&b, m, today).id.clone())
        .collect();
    assert_eq!(ledger.reservation(&r[3]).unwrap().priority, 4);

    // Cancel the head of the queue twice over.
    ledger.cancel_reservation(&r[0]);
    ledger.cancel_reservation(&r[1]);

    let queue = ledger.reservation_queue(&b);
    assert_eq!(queue.len(), 2);
    // Remaining entries keep their snapshot priorities.
    assert_eq!(queue[0].priority, 3);
    assert_eq!(queue[1].priority, 4);

    // A new reservation counts only live entries.
    let r_new = ledger.reserve_book(&b, &members[0], today).id.clone();
    assert_eq!(ledger.reservation(&r_new).unwrap().priority, 3);
}

// ============================================================================
// Snapshot edge cases
// ============================================================================

#[test]
fn snapshot_roundtrip_preserves_full_lifecycle() {
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("Clean Code", 3)).id.clone();
    let m = ledger.add_member(member("Michael")).id.clone();
    let t = ledger.issue_book(&b, &m, date(2026, 2, 5)).unwrap().id.clone();
    ledger.return_book(&t, date(2026, 2, 25)).unwrap();
    ledger.reserve_book(&b, &m, date(2026, 2, 26));

    let json = ledger.export_state().to_json_pretty().unwrap();
    let snapshot = LedgerSnapshot::from_json(&json).unwrap();

    let mut restored = Ledger::default();
    restored.import_state(snapshot).unwrap();

    assert_eq!(restored.loan(&t).unwrap().status, LoanStatus::Returned);
    assert_eq!(restored.member(&m).unwrap().total_fines, 6.00);
    assert_eq!(restored.fines().count(), 1);
    assert_eq!(restored.reservation_queue(&b).len(), 1);

    // The restored ledger behaves identically going forward.
    let t2 = restored.issue_book(&b, &m, date(2026, 3, 1)).unwrap().id.clone();
    assert_ne!(t2, t);
}

#[test]
fn imported_overdue_marker_roundtrips() {
    // Seed data sometimes stores an explicit overdue status; it must
    // survive import and still count as an open loan.
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("AI: A Modern Approach", 4)).id.clone();
    let m = ledger.add_member(member("Stuart")).id.clone();
    let t = ledger.issue_book(&b, &m, date(2026, 1, 1)).unwrap().id.clone();

    let mut snapshot = ledger.export_state();
    if let Some(loan) = snapshot.loans.get_mut(&t) {
        loan.status = LoanStatus::Overdue;
    }

    let mut restored = Ledger::default();
    restored.import_state(snapshot).unwrap();
    assert_eq!(restored.loan(&t).unwrap().status, LoanStatus::Overdue);
    assert!(restored.loan(&t).unwrap().is_open());

    // And it can still be returned exactly once.
    restored.return_book(&t, date(2026, 3, 1)).unwrap();
    assert!(matches!(
        restored.return_book(&t, date(2026, 3, 2)),
        Err(Error::AlreadyReturned(_))
    ));
}

// ============================================================================
// Catalog patch edge cases
// ============================================================================

#[test]
fn shrinking_total_copies_below_available_is_rejected() {
    let mut ledger = Ledger::default();
    let b = ledger.add_book(book("Influence", 3)).id.clone();

    assert!(matches!(
        ledger.update_book(
            &b,
            BookPatch {
                total_copies: Some(1),
                ..Default::default()
            },
        ),
        Err(Error::InvalidCopyCount { .. })
    ));

    // Shrinking both in step is fine.
    ledger
        .update_book(
            &b,
            BookPatch {
                total_copies: Some(1),
                available_copies: Some(1),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(ledger.book(&b).unwrap().total_copies, 1);
}
