//! Ledger - the in-memory circulation state container.
//!
//! The Ledger owns the catalog, membership, loans, reservations, fines and
//! the notification log, and enforces every circulation invariant. Each
//! operation validates first and then applies its effects as one unit, so
//! state is never left partially mutated.
//!
//! The current date is always an explicit argument; the ledger never reads
//! a clock, which keeps every operation deterministic and testable.

use crate::{
    book::{Book, BookPatch, NewBook},
    error::Result,
    event::LedgerEvent,
    fine::{Fine, FineStatus, OVERDUE_RETURN_REASON},
    id::{prefix, IdSequence},
    loan::{Loan, LoanStatus},
    member::{Member, MemberPatch, NewMember},
    notification::{NewNotification, Notification},
    policy::CirculationPolicy,
    reservation::{Reservation, ReservationStatus},
    snapshot::LedgerSnapshot,
    BookId, Error, FineId, LoanId, MemberId, ReservationId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of returning a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnReceipt {
    /// The loan that was closed
    pub loan_id: LoanId,
    /// Fine charged at return; 0 for an on-time return
    pub fine_charged: f64,
    /// Whole days past due at return time
    pub days_overdue: i64,
    /// Fine record created, when `fine_charged > 0`
    pub fine_id: Option<FineId>,
}

/// Rollup of ledger state for dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub books: usize,
    pub total_copies: u64,
    pub available_copies: u64,
    pub members: usize,
    pub open_loans: usize,
    pub overdue_loans: usize,
    pub queued_reservations: usize,
    pub pending_fines: usize,
    pub fines_outstanding: f64,
}

/// The authoritative store of circulation state.
#[derive(Debug, Clone)]
pub struct Ledger {
    policy: CirculationPolicy,
    ids: IdSequence,
    books: HashMap<BookId, Book>,
    members: HashMap<MemberId, Member>,
    loans: HashMap<LoanId, Loan>,
    reservations: HashMap<ReservationId, Reservation>,
    fines: HashMap<FineId, Fine>,
    notifications: Vec<Notification>,
    /// Events not yet drained by a notifier
    events: Vec<LedgerEvent>,
}

impl Ledger {
    /// Create an empty ledger with the given policy.
    pub fn new(policy: CirculationPolicy) -> Self {
        Self {
            policy,
            ids: IdSequence::default(),
            books: HashMap::new(),
            members: HashMap::new(),
            loans: HashMap::new(),
            reservations: HashMap::new(),
            fines: HashMap::new(),
            notifications: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Get the policy this ledger was constructed with.
    pub fn policy(&self) -> &CirculationPolicy {
        &self.policy
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// Add a book to the catalog. Availability starts equal to the total.
    pub fn add_book(&mut self, new: NewBook) -> &Book {
        let id = self.ids.next_id(prefix::BOOK);
        let book = new.into_book(id.clone());
        self.books.entry(id).or_insert(book)
    }

    /// Apply a partial update to a book.
    ///
    /// Rejects patches that would leave more copies available than exist.
    pub fn update_book(&mut self, id: &str, patch: BookPatch) -> Result<&Book> {
        let book = self
            .books
            .get(id)
            .ok_or_else(|| Error::BookNotFound(id.to_string()))?;
        let updated = patch.apply_to(book)?;
        self.books.insert(id.to_string(), updated);
        self.books
            .get(id)
            .ok_or_else(|| Error::BookNotFound(id.to_string()))
    }

    // ------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------

    /// Register a member.
    pub fn add_member(&mut self, new: NewMember) -> &Member {
        let id = self.ids.next_id(prefix::MEMBER);
        let member = new.into_member(id.clone());
        self.members.entry(id).or_insert(member)
    }

    /// Apply a partial update to a member.
    pub fn update_member(&mut self, id: &str, patch: MemberPatch) -> Result<&Member> {
        let member = self
            .members
            .get(id)
            .ok_or_else(|| Error::MemberNotFound(id.to_string()))?;
        let updated = patch.apply_to(member);
        self.members.insert(id.to_string(), updated);
        self.members
            .get(id)
            .ok_or_else(|| Error::MemberNotFound(id.to_string()))
    }

    // ------------------------------------------------------------------
    // Circulation
    // ------------------------------------------------------------------

    /// Issue a copy of `book_id` to `member_id` on `today`.
    ///
    /// Validates availability (and, when the policy enforces them, member
    /// standing and the loan cap) before touching any state.
    pub fn issue_book(&mut self, book_id: &str, member_id: &str, today: NaiveDate) -> Result<&Loan> {
        let book = self
            .books
            .get(book_id)
            .ok_or_else(|| Error::BookNotFound(book_id.to_string()))?;
        if !book.is_available() {
            return Err(Error::NoCopiesAvailable(book_id.to_string()));
        }

        let member = self
            .members
            .get(member_id)
            .ok_or_else(|| Error::MemberNotFound(member_id.to_string()))?;
        if self.policy.enforce_member_status && !member.is_active() {
            return Err(Error::MemberNotActive {
                member: member_id.to_string(),
                status: member.status.to_string(),
            });
        }
        if self.policy.enforce_loan_limit && member.books_issued >= self.policy.max_books_per_member
        {
            return Err(Error::LoanLimitReached(
                member_id.to_string(),
                self.policy.max_books_per_member,
            ));
        }

        // Checks passed; apply the whole effect.
        let id = self.ids.next_id(prefix::LOAN);
        let loan = Loan::new(
            id.clone(),
            book_id.to_string(),
            member_id.to_string(),
            today,
            self.policy.loan_period_days,
        );

        if let Some(book) = self.books.get_mut(book_id) {
            book.available_copies -= 1;
        }
        if let Some(member) = self.members.get_mut(member_id) {
            member.books_issued += 1;
        }

        self.events.push(LedgerEvent::BookIssued {
            loan_id: id.clone(),
            book_id: book_id.to_string(),
            member_id: member_id.to_string(),
            due_date: loan.due_date,
        });

        let loan: &Loan = self.loans.entry(id).or_insert(loan);
        Ok(loan)
    }

    /// Return the book on loan `loan_id` as of `today`.
    ///
    /// A loan can be returned exactly once; a second return is rejected
    /// with [`Error::AlreadyReturned`] and leaves all state untouched.
    pub fn return_book(&mut self, loan_id: &str, today: NaiveDate) -> Result<ReturnReceipt> {
        let loan = self
            .loans
            .get(loan_id)
            .ok_or_else(|| Error::LoanNotFound(loan_id.to_string()))?;
        if !loan.is_open() {
            return Err(Error::AlreadyReturned(loan_id.to_string()));
        }

        let days_overdue = loan.days_overdue(today);
        let fine_charged = days_overdue as f64 * self.policy.fine_per_day;
        let book_id = loan.book_id.clone();
        let member_id = loan.member_id.clone();

        if let Some(loan) = self.loans.get_mut(loan_id) {
            loan.status = LoanStatus::Returned;
            loan.return_date = Some(today);
            loan.fine = fine_charged;
        }

        // The copy goes back on the shelf, clamped at the owned total.
        // Dangling book/member references degrade to skipping the counter.
        if let Some(book) = self.books.get_mut(&book_id) {
            book.available_copies = (book.available_copies + 1).min(book.total_copies);
        }
        if let Some(member) = self.members.get_mut(&member_id) {
            member.books_issued = member.books_issued.saturating_sub(1);
        }

        self.events.push(LedgerEvent::BookReturned {
            loan_id: loan_id.to_string(),
            book_id,
            member_id: member_id.clone(),
            fine_charged,
        });

        let mut fine_id = None;
        if fine_charged > 0.0 {
            let id = self.ids.next_id(prefix::FINE);
            let fine = Fine {
                id: id.clone(),
                member_id: member_id.clone(),
                loan_id: Some(loan_id.to_string()),
                amount: fine_charged,
                reason: OVERDUE_RETURN_REASON.to_string(),
                status: FineStatus::Pending,
                date: today,
            };
            self.fines.insert(id.clone(), fine);
            if let Some(member) = self.members.get_mut(&member_id) {
                member.total_fines += fine_charged;
            }
            self.events.push(LedgerEvent::FineAssessed {
                fine_id: id.clone(),
                member_id,
                amount: fine_charged,
            });
            fine_id = Some(id);
        }

        Ok(ReturnReceipt {
            loan_id: loan_id.to_string(),
            fine_charged,
            days_overdue,
            fine_id,
        })
    }

    // ------------------------------------------------------------------
    // Reservations
    // ------------------------------------------------------------------

    /// Place a hold on a book.
    ///
    /// Always succeeds, even when copies are currently on the shelf.
    /// Priority is the 1-based queue position at creation time and is not
    /// renumbered by later cancellations.
    pub fn reserve_book(
        &mut self,
        book_id: &str,
        member_id: &str,
        today: NaiveDate,
    ) -> &Reservation {
        let queued = self
            .reservations
            .values()
            .filter(|r| r.book_id == book_id && r.is_queued())
            .count() as u32;

        let id = self.ids.next_id(prefix::RESERVATION);
        let reservation = Reservation {
            id: id.clone(),
            book_id: book_id.to_string(),
            member_id: member_id.to_string(),
            reservation_date: today,
            status: ReservationStatus::Waiting,
            priority: queued + 1,
        };

        self.events.push(LedgerEvent::ReservationPlaced {
            reservation_id: id.clone(),
            book_id: book_id.to_string(),
            member_id: member_id.to_string(),
            priority: reservation.priority,
        });

        self.reservations.entry(id).or_insert(reservation)
    }

    /// Cancel a reservation. Returns false (not an error) when absent.
    pub fn cancel_reservation(&mut self, id: &str) -> bool {
        match self.reservations.get_mut(id) {
            Some(reservation) => {
                reservation.status = ReservationStatus::Cancelled;
                self.events.push(LedgerEvent::ReservationCancelled {
                    reservation_id: id.to_string(),
                    book_id: reservation.book_id.clone(),
                });
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Fines
    // ------------------------------------------------------------------

    /// Mark a fine as paid and reduce the member's fine rollup.
    ///
    /// Paying an already-paid fine is accepted and changes nothing.
    pub fn pay_fine(&mut self, id: &str) -> Result<&Fine> {
        let (member_id, amount, was_pending) = {
            let fine = self
                .fines
                .get(id)
                .ok_or_else(|| Error::FineNotFound(id.to_string()))?;
            (fine.member_id.clone(), fine.amount, fine.is_pending())
        };

        if was_pending {
            if let Some(fine) = self.fines.get_mut(id) {
                fine.status = FineStatus::Paid;
            }
            if let Some(member) = self.members.get_mut(&member_id) {
                member.total_fines = (member.total_fines - amount).max(0.0);
            }
            self.events.push(LedgerEvent::FinePaid {
                fine_id: id.to_string(),
                member_id,
            });
        }

        self.fines
            .get(id)
            .ok_or_else(|| Error::FineNotFound(id.to_string()))
    }

    /// Record a fine not tied to a loan (a lost book, for example).
    pub fn add_fine(
        &mut self,
        member_id: &str,
        amount: f64,
        reason: &str,
        today: NaiveDate,
    ) -> Result<&Fine> {
        if !self.members.contains_key(member_id) {
            return Err(Error::MemberNotFound(member_id.to_string()));
        }

        let id = self.ids.next_id(prefix::FINE);
        let fine = Fine {
            id: id.clone(),
            member_id: member_id.to_string(),
            loan_id: None,
            amount,
            reason: reason.to_string(),
            status: FineStatus::Pending,
            date: today,
        };
        self.fines.insert(id.clone(), fine);
        if let Some(member) = self.members.get_mut(member_id) {
            member.total_fines += amount;
        }
        self.events.push(LedgerEvent::FineAssessed {
            fine_id: id.clone(),
            member_id: member_id.to_string(),
            amount,
        });

        self.fines
            .get(&id)
            .ok_or_else(|| Error::FineNotFound(id.clone()))
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// Append a notification to the log.
    pub fn add_notification(&mut self, new: NewNotification) -> &Notification {
        let id = self.ids.next_id(prefix::NOTIFICATION);
        let index = self.notifications.len();
        self.notifications.push(new.into_notification(id));
        &self.notifications[index]
    }

    /// Mark one notification read. Returns false when absent.
    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every notification read.
    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn loan(&self, id: &str) -> Option<&Loan> {
        self.loans.get(id)
    }

    pub fn reservation(&self, id: &str) -> Option<&Reservation> {
        self.reservations.get(id)
    }

    pub fn fine(&self, id: &str) -> Option<&Fine> {
        self.fines.get(id)
    }

    /// All books, in unspecified order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn loans(&self) -> impl Iterator<Item = &Loan> {
        self.loans.values()
    }

    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.values()
    }

    pub fn fines(&self) -> impl Iterator<Item = &Fine> {
        self.fines.values()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Status of a loan as of `today`, deriving overdue from the due date.
    pub fn loan_status(&self, id: &str, today: NaiveDate) -> Option<LoanStatus> {
        self.loans.get(id).map(|loan| loan.status_on(today))
    }

    /// Open loans past their due date as of `today`.
    pub fn overdue_loans(&self, today: NaiveDate) -> Vec<&Loan> {
        self.loans
            .values()
            .filter(|loan| loan.status_on(today) == LoanStatus::Overdue)
            .collect()
    }

    /// The hold queue for a book: queued entries ordered by priority.
    ///
    /// Priorities are never renumbered, so cancellations can leave equal
    /// priorities; ties break on reservation date, then id.
    pub fn reservation_queue(&self, book_id: &str) -> Vec<&Reservation> {
        let mut queue: Vec<&Reservation> = self
            .reservations
            .values()
            .filter(|r| r.book_id == book_id && r.is_queued())
            .collect();
        queue.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.reservation_date.cmp(&b.reservation_date))
                .then_with(|| a.id.cmp(&b.id))
        });
        queue
    }

    /// Sum of a member's pending fine amounts, recomputed from the fines
    /// collection (the drift-proof view of the `total_fines` rollup).
    pub fn outstanding_fines(&self, member_id: &str) -> f64 {
        self.fines
            .values()
            .filter(|f| f.member_id == member_id && f.is_pending())
            .map(|f| f.amount)
            .sum()
    }

    /// Dashboard rollup as of `today`.
    pub fn summary(&self, today: NaiveDate) -> LedgerSummary {
        LedgerSummary {
            books: self.books.len(),
            total_copies: self.books.values().map(|b| u64::from(b.total_copies)).sum(),
            available_copies: self
                .books
                .values()
                .map(|b| u64::from(b.available_copies))
                .sum(),
            members: self.members.len(),
            open_loans: self.loans.values().filter(|l| l.is_open()).count(),
            overdue_loans: self
                .loans
                .values()
                .filter(|l| l.status_on(today) == LoanStatus::Overdue)
                .count(),
            queued_reservations: self
                .reservations
                .values()
                .filter(|r| r.is_queued())
                .count(),
            pending_fines: self.fines.values().filter(|f| f.is_pending()).count(),
            fines_outstanding: self
                .fines
                .values()
                .filter(|f| f.is_pending())
                .map(|f| f.amount)
                .sum(),
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Events not yet drained.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Take all undrained events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Snapshot
    // ------------------------------------------------------------------

    /// Export the current state as a snapshot for persistence.
    pub fn export_state(&self) -> LedgerSnapshot {
        let mut snapshot = LedgerSnapshot::new(self.ids.clone());
        for book in self.books.values() {
            snapshot.books.insert(book.id.clone(), book.clone());
        }
        for member in self.members.values() {
            snapshot.members.insert(member.id.clone(), member.clone());
        }
        for loan in self.loans.values() {
            snapshot.loans.insert(loan.id.clone(), loan.clone());
        }
        for reservation in self.reservations.values() {
            snapshot
                .reservations
                .insert(reservation.id.clone(), reservation.clone());
        }
        for fine in self.fines.values() {
            snapshot.fines.insert(fine.id.clone(), fine.clone());
        }
        snapshot.notifications = self.notifications.clone();
        snapshot
    }

    /// Replace this ledger's state with the snapshot's.
    ///
    /// Validates before touching anything; on error the ledger is
    /// unchanged. The construction-time policy is kept.
    pub fn import_state(&mut self, snapshot: LedgerSnapshot) -> Result<()> {
        snapshot.validate()?;

        self.ids = snapshot.ids;
        self.books = snapshot.books.into_iter().collect();
        self.members = snapshot.members.into_iter().collect();
        self.loans = snapshot.loans.into_iter().collect();
        self.reservations = snapshot.reservations.into_iter().collect();
        self.fines = snapshot.fines.into_iter().collect();
        self.notifications = snapshot.notifications;
        self.events.clear();

        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(CirculationPolicy::default())
    }
}
