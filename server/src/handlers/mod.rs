//! Request handlers for the circulation API.

pub mod books;
pub mod circulation;
pub mod fines;
pub mod members;
pub mod notifications;
pub mod reservations;
pub mod stats;
pub mod storage;
