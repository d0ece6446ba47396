//! Circulation API routes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{
    books, circulation, fines, members, notifications, reservations, stats, storage,
};
use crate::notify;
use crate::AppState;

/// Create API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/api/books", get(books::list_books).post(books::create_book))
        .route(
            "/api/books/{id}",
            get(books::get_book).patch(books::update_book),
        )
        // Membership
        .route(
            "/api/members",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/api/members/{id}",
            get(members::get_member).patch(members::update_member),
        )
        // Circulation
        .route(
            "/api/loans",
            get(circulation::list_loans).post(circulation::issue_book),
        )
        .route("/api/loans/overdue", get(circulation::list_overdue))
        .route("/api/loans/{id}/return", post(circulation::return_book))
        // Reservations
        .route(
            "/api/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/api/reservations/{id}/cancel",
            post(reservations::cancel_reservation),
        )
        // Fines
        .route("/api/fines", get(fines::list_fines).post(fines::create_fine))
        .route("/api/fines/{id}/pay", post(fines::pay_fine))
        // Notifications
        .route("/api/notifications", get(notifications::list_notifications))
        .route(
            "/api/notifications/{id}/read",
            post(notifications::mark_read),
        )
        .route(
            "/api/notifications/read-all",
            post(notifications::mark_all_read),
        )
        // Dashboard
        .route("/api/stats", get(stats::get_stats))
        // State transfer
        .route("/api/export", get(storage::export_state))
        .route("/api/import", post(storage::import_state))
        // Live event feed
        .route("/ws", get(notify::ws_handler))
}
