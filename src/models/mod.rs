//! Data models for Libris
//!
//! Each persisted record derives `FromRow` for reading and `Serialize` for the
//! fixed key set it is exposed with over HTTP.

pub mod book;
pub mod borrowing;
pub mod member;
pub mod staff;

// Re-export commonly used types
pub use book::{Book, BookQuery, CreateBook, UpdateBook};
pub use borrowing::{
    BorrowWindow, BorrowedItem, BorrowedLine, Borrowing, BorrowersRecord, BorrowersRecordDetail,
};
pub use member::Member;
pub use staff::LibraryStaff;
