//! # Stacks Ledger
//!
//! The circulation ledger for Stacks library management.
//!
//! This crate is the single source of truth for catalog, membership,
//! loans, reservations and fines, and enforces every circulation
//! invariant atomically per operation.
//!
//! ## Design Principles
//!
//! - **No IO**: the ledger has no knowledge of files, network, or platform
//! - **No ambient clock**: the current date is an explicit argument, so
//!   the same inputs always produce the same outputs
//! - **Typed failures**: "not found", "already returned" and "no copies
//!   available" are distinct, inspectable errors, never silent no-ops
//! - **Atomic operations**: each operation fully applies or fully rejects;
//!   state is never left partially mutated
//!
//! ## Core Concepts
//!
//! ### Circulation
//!
//! [`Ledger::issue_book`] checks availability, moves a copy off the shelf
//! and opens an active [`Loan`] due after the policy loan period.
//! [`Ledger::return_book`] closes the loan exactly once, restores
//! availability (clamped at the owned total) and assesses a pending
//! [`Fine`] when the return is overdue.
//!
//! ### Derived overdue status
//!
//! Overdue is computed on read from the due date ([`Loan::status_on`],
//! [`Ledger::overdue_loans`]); there is no stored-status sweep to go
//! stale.
//!
//! ### Events
//!
//! Every mutation appends a [`LedgerEvent`] to an internal log drained via
//! [`Ledger::drain_events`]. A notifier can translate these into
//! [`Notification`] records or push them to connected clients.
//!
//! ## Quick Start
//!
//! ```rust
//! use stacks_ledger::{CirculationPolicy, Ledger, NewBook, NewMember, MembershipType};
//! use chrono::NaiveDate;
//!
//! let mut ledger = Ledger::new(CirculationPolicy::default());
//!
//! let book_id = ledger
//!     .add_book(NewBook {
//!         isbn: "978-0-13-235088-4".into(),
//!         title: "Clean Code".into(),
//!         author: "Robert C. Martin".into(),
//!         publisher: "Prentice Hall".into(),
//!         category: "Technology".into(),
//!         total_copies: 2,
//!         location: "Shelf A-14".into(),
//!         year: 2008,
//!     })
//!     .id
//!     .clone();
//!
//! let member_id = ledger
//!     .add_member(NewMember {
//!         name: "Sarah Parker".into(),
//!         email: "sarah@uni.edu".into(),
//!         phone: "+1 555-0101".into(),
//!         department: "Computer Science".into(),
//!         membership_type: MembershipType::Student,
//!         join_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
//!     })
//!     .id
//!     .clone();
//!
//! let today = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
//! let loan_id = ledger.issue_book(&book_id, &member_id, today).unwrap().id.clone();
//! assert_eq!(ledger.book(&book_id).unwrap().available_copies, 1);
//!
//! let receipt = ledger
//!     .return_book(&loan_id, NaiveDate::from_ymd_opt(2026, 2, 10).unwrap())
//!     .unwrap();
//! assert_eq!(receipt.fine_charged, 0.0);
//! ```
//!
//! ## Persistence
//!
//! Use [`Ledger::export_state`] and [`Ledger::import_state`] with
//! [`LedgerSnapshot`] for persistence. Snapshots serialize to JSON with
//! deterministic ordering and carry a format version.

pub mod book;
pub mod error;
pub mod event;
pub mod fine;
pub mod id;
pub mod ledger;
pub mod loan;
pub mod member;
pub mod notification;
pub mod policy;
pub mod reservation;
pub mod snapshot;

// Re-export main types at crate root
pub use book::{Book, BookPatch, NewBook};
pub use error::{Error, Result};
pub use event::LedgerEvent;
pub use fine::{Fine, FineStatus, OVERDUE_RETURN_REASON};
pub use id::IdSequence;
pub use ledger::{Ledger, LedgerSummary, ReturnReceipt};
pub use loan::{Loan, LoanStatus};
pub use member::{Member, MemberPatch, MemberStatus, MembershipType, NewMember};
pub use notification::{NewNotification, Notification, NotificationKind};
pub use policy::CirculationPolicy;
pub use reservation::{Reservation, ReservationStatus};
pub use snapshot::{LedgerSnapshot, SNAPSHOT_FORMAT_VERSION};

/// Type aliases for clarity
pub type BookId = String;
pub type MemberId = String;
pub type LoanId = String;
pub type ReservationId = String;
pub type FineId = String;
pub type NotificationId = String;
