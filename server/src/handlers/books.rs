//! Catalog handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use stacks_ledger::{Book, BookPatch, Error, NewBook};

use crate::auth::Staff;
use crate::error::Result;
use crate::AppState;

/// GET /api/books - the whole catalog, ordered by title.
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let ledger = state.ledger.read().await;
    let mut books: Vec<Book> = ledger.books().cloned().collect();
    books.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
    Json(books)
}

/// GET /api/books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>> {
    let ledger = state.ledger.read().await;
    let book = ledger.book(&id).cloned().ok_or(Error::BookNotFound(id))?;
    Ok(Json(book))
}

/// POST /api/books
pub async fn create_book(
    State(state): State<AppState>,
    _staff: Staff,
    Json(new): Json<NewBook>,
) -> (StatusCode, Json<Book>) {
    let mut ledger = state.ledger.write().await;
    let book = ledger.add_book(new).clone();
    drop(ledger);
    state.mark_dirty();

    tracing::info!(book_id = %book.id, title = %book.title, "Book added to catalog");
    (StatusCode::CREATED, Json(book))
}

/// PATCH /api/books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    _staff: Staff,
    Path(id): Path<String>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Book>> {
    let mut ledger = state.ledger.write().await;
    let book = ledger.update_book(&id, patch)?.clone();
    drop(ledger);
    state.mark_dirty();

    Ok(Json(book))
}
