//! Demo catalog for empty ledgers.

use chrono::NaiveDate;
use stacks_ledger::{Ledger, MemberPatch, MemberStatus, MembershipType, NewBook, NewMember};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Populate a ledger with a small demo library.
///
/// A few titles, a handful of members (one suspended), one open loan and
/// one hold, so every screen has something to show on first boot.
pub fn seed_demo(ledger: &mut Ledger, today: NaiveDate) {
    let books = [
        NewBook {
            isbn: "978-0-13-468599-1".into(),
            title: "The Pragmatic Programmer".into(),
            author: "David Thomas & Andrew Hunt".into(),
            publisher: "Addison-Wesley".into(),
            category: "Technology".into(),
            total_copies: 5,
            location: "Shelf A-12".into(),
            year: 2019,
        },
        NewBook {
            isbn: "978-0-06-112008-4".into(),
            title: "To Kill a Mockingbird".into(),
            author: "Harper Lee".into(),
            publisher: "HarperCollins".into(),
            category: "Fiction".into(),
            total_copies: 8,
            location: "Shelf B-03".into(),
            year: 1960,
        },
        NewBook {
            isbn: "978-0-201-63361-0".into(),
            title: "Design Patterns".into(),
            author: "Gang of Four".into(),
            publisher: "Addison-Wesley".into(),
            category: "Technology".into(),
            total_copies: 4,
            location: "Shelf A-15".into(),
            year: 1994,
        },
        NewBook {
            isbn: "978-0-14-028329-7".into(),
            title: "1984".into(),
            author: "George Orwell".into(),
            publisher: "Penguin Books".into(),
            category: "Fiction".into(),
            total_copies: 10,
            location: "Shelf B-01".into(),
            year: 1949,
        },
        NewBook {
            isbn: "978-0-553-21311-7".into(),
            title: "A Brief History of Time".into(),
            author: "Stephen Hawking".into(),
            publisher: "Bantam Books".into(),
            category: "Science".into(),
            total_copies: 7,
            location: "Shelf D-02".into(),
            year: 1988,
        },
        NewBook {
            isbn: "978-0-14-118776-1".into(),
            title: "The Republic".into(),
            author: "Plato".into(),
            publisher: "Penguin Classics".into(),
            category: "Philosophy".into(),
            total_copies: 3,
            location: "Shelf F-01".into(),
            year: -380,
        },
    ];
    let book_ids: Vec<String> = books
        .into_iter()
        .map(|b| ledger.add_book(b).id.clone())
        .collect();

    let members = [
        NewMember {
            name: "Sarah Parker".into(),
            email: "sarah@uni.edu".into(),
            phone: "+1 555-0101".into(),
            department: "Computer Science".into(),
            membership_type: MembershipType::Student,
            join_date: date(2025, 9, 1),
        },
        NewMember {
            name: "Dr. Emily Foster".into(),
            email: "emily.f@uni.edu".into(),
            phone: "+1 555-0103".into(),
            department: "Physics".into(),
            membership_type: MembershipType::Faculty,
            join_date: date(2024, 1, 10),
        },
        NewMember {
            name: "Raj Patel".into(),
            email: "raj.p@uni.edu".into(),
            phone: "+1 555-0104".into(),
            department: "Engineering".into(),
            membership_type: MembershipType::Student,
            join_date: date(2025, 9, 20),
        },
        NewMember {
            name: "Thomas Kim".into(),
            email: "thomas.k@uni.edu".into(),
            phone: "+1 555-0108".into(),
            department: "Business".into(),
            membership_type: MembershipType::Student,
            join_date: date(2025, 6, 20),
        },
        NewMember {
            name: "David Lee".into(),
            email: "david.l@uni.edu".into(),
            phone: "+1 555-0112".into(),
            department: "Engineering".into(),
            membership_type: MembershipType::Staff,
            join_date: date(2024, 11, 15),
        },
    ];
    let member_ids: Vec<String> = members
        .into_iter()
        .map(|m| ledger.add_member(m).id.clone())
        .collect();

    // Thomas Kim is suspended in the demo data.
    let _ = ledger.update_member(
        &member_ids[3],
        MemberPatch {
            status: Some(MemberStatus::Suspended),
            ..Default::default()
        },
    );

    // One loan issued last week and one hold on a popular title.
    let _ = ledger.issue_book(
        &book_ids[0],
        &member_ids[0],
        today - chrono::Duration::days(7),
    );
    ledger.reserve_book(&book_ids[2], &member_ids[2], today);

    // Seeding is setup, not activity worth notifying about.
    ledger.drain_events();

    tracing::info!(
        books = book_ids.len(),
        members = member_ids.len(),
        "Seeded demo library"
    );
}
