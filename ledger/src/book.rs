//! Catalog entries.

use crate::{BookId, Error, Result};
use serde::{Deserialize, Serialize};

/// A title in the catalog, tracking how many physical copies exist and
/// how many are currently on the shelf.
///
/// Invariant: `available_copies <= total_copies` at all times. The ledger
/// is the only writer, so the bound is checked at every mutation site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier
    pub id: BookId,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub category: String,
    /// Copies owned by the library
    pub total_copies: u32,
    /// Copies currently on the shelf
    pub available_copies: u32,
    /// Shelf location, e.g. "Shelf A-12"
    pub location: String,
    /// Publication year; negative for BCE works
    pub year: i32,
}

impl Book {
    /// Whether at least one copy can be issued right now.
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Check the availability bound, returning the book id on violation.
    pub fn check_copy_bound(&self) -> Result<()> {
        if self.available_copies > self.total_copies {
            return Err(Error::InvalidCopyCount {
                book: self.id.clone(),
                available: self.available_copies,
                total: self.total_copies,
            });
        }
        Ok(())
    }
}

/// Fields for adding a book to the catalog.
///
/// There is no `available_copies` here: a new book has no copies checked
/// out, so availability starts equal to the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub category: String,
    pub total_copies: u32,
    pub location: String,
    pub year: i32,
}

impl NewBook {
    pub(crate) fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            isbn: self.isbn,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            category: self.category,
            available_copies: self.total_copies,
            total_copies: self.total_copies,
            location: self.location,
            year: self.year,
        }
    }
}

/// Partial update for a book; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub category: Option<String>,
    pub total_copies: Option<u32>,
    pub available_copies: Option<u32>,
    pub location: Option<String>,
    pub year: Option<i32>,
}

impl BookPatch {
    /// Apply the patch to a copy of `book`, validating the copy bound.
    pub(crate) fn apply_to(&self, book: &Book) -> Result<Book> {
        let mut updated = book.clone();
        if let Some(isbn) = &self.isbn {
            updated.isbn = isbn.clone();
        }
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(author) = &self.author {
            updated.author = author.clone();
        }
        if let Some(publisher) = &self.publisher {
            updated.publisher = publisher.clone();
        }
        if let Some(category) = &self.category {
            updated.category = category.clone();
        }
        if let Some(total) = self.total_copies {
            updated.total_copies = total;
        }
        if let Some(available) = self.available_copies {
            updated.available_copies = available;
        }
        if let Some(location) = &self.location {
            updated.location = location.clone();
        }
        if let Some(year) = self.year {
            updated.year = year;
        }
        updated.check_copy_bound()?;
        Ok(updated)
    }
}
