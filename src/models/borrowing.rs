//! Borrowing transactions, their line items, and the joined views used to
//! answer "what was borrowed, by whom, and when".

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::Book;
use crate::error::{AppError, AppResult};

/// Borrowing transaction: one member borrowing one or more books, processed by a staff member
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowersRecord {
    pub borrowers_id: i32,
    pub member_id: i32,
    pub staff_id: i32,
    pub date_borrowed: NaiveDate,
    pub due_date: Option<NaiveDate>,
}

/// Create borrowing transaction request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBorrowersRecord {
    pub member_id: i32,
    pub staff_id: i32,
    /// Defaults to today
    pub date_borrowed: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

/// Update borrowing transaction request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBorrowersRecord {
    pub member_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub date_borrowed: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

/// Line item of a borrowing transaction
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowersRecordDetail {
    pub detail_id: i32,
    pub borrowers_id: i32,
    pub book_id: i32,
    pub number_of_copies: i32,
}

fn one_copy() -> i32 {
    1
}

/// Add line item request (the transaction comes from the path)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddRecordDetail {
    pub book_id: i32,
    #[serde(default = "one_copy")]
    #[validate(range(min = 1, message = "At least one copy must be borrowed"))]
    pub number_of_copies: i32,
}

/// Line item ready to be inserted
#[derive(Debug)]
pub struct NewRecordDetail {
    pub borrowers_id: i32,
    pub book_id: i32,
    pub number_of_copies: i32,
}

/// Update line item request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRecordDetail {
    pub book_id: Option<i32>,
    #[validate(range(min = 1, message = "At least one copy must be borrowed"))]
    pub number_of_copies: Option<i32>,
}

/// Inclusive range of borrow dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BorrowWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::BadRequest(format!(
                "Window start {} is after its end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The `days` days before `today`, today included
    pub fn trailing_days(today: NaiveDate, days: i64) -> Self {
        Self {
            start: today - Duration::days(days),
            end: today,
        }
    }
}

/// One row of the transaction ⋈ line item ⋈ book join
#[derive(Debug, Clone, FromRow)]
pub struct BorrowingRow {
    pub borrowers_id: i32,
    pub member_id: i32,
    pub staff_id: i32,
    pub date_borrowed: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub detail_id: i32,
    pub number_of_copies: i32,
    #[sqlx(flatten)]
    pub book: Book,
}

/// Book borrowed within a transaction
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowedLine {
    pub detail_id: i32,
    pub number_of_copies: i32,
    pub book: Book,
}

/// Borrowing transaction with every book it covers
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Borrowing {
    pub borrowers_id: i32,
    pub member_id: i32,
    pub staff_id: i32,
    pub date_borrowed: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub items: Vec<BorrowedLine>,
}

/// Single borrowed line item with its book and transaction dates
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowedItem {
    pub detail_id: i32,
    pub borrowers_id: i32,
    pub member_id: i32,
    pub date_borrowed: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub number_of_copies: i32,
    pub book: Book,
}

impl From<BorrowingRow> for BorrowedItem {
    fn from(row: BorrowingRow) -> Self {
        Self {
            detail_id: row.detail_id,
            borrowers_id: row.borrowers_id,
            member_id: row.member_id,
            date_borrowed: row.date_borrowed,
            due_date: row.due_date,
            number_of_copies: row.number_of_copies,
            book: row.book,
        }
    }
}

/// Fold joined rows into one `Borrowing` per transaction, ascending by
/// transaction id, line items ascending by detail id.
pub fn group_by_record(rows: Vec<BorrowingRow>) -> Vec<Borrowing> {
    let mut grouped: BTreeMap<i32, Borrowing> = BTreeMap::new();

    for row in rows {
        let borrowing = grouped.entry(row.borrowers_id).or_insert_with(|| Borrowing {
            borrowers_id: row.borrowers_id,
            member_id: row.member_id,
            staff_id: row.staff_id,
            date_borrowed: row.date_borrowed,
            due_date: row.due_date,
            items: Vec::new(),
        });
        borrowing.items.push(BorrowedLine {
            detail_id: row.detail_id,
            number_of_copies: row.number_of_copies,
            book: row.book,
        });
    }

    grouped
        .into_values()
        .map(|mut borrowing| {
            borrowing.items.sort_by_key(|line| line.detail_id);
            borrowing
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book(id: i32, title: &str) -> Book {
        Book {
            book_id: id,
            title: title.to_string(),
            edition: None,
            author: None,
            publisher: None,
            copies: 1,
            costs: Decimal::new(500, 2),
            remarks: None,
        }
    }

    fn row(borrowers_id: i32, detail_id: i32, book_id: i32) -> BorrowingRow {
        BorrowingRow {
            borrowers_id,
            member_id: 10 + borrowers_id,
            staff_id: 1,
            date_borrowed: date(2024, 3, borrowers_id as u32),
            due_date: Some(date(2024, 4, borrowers_id as u32)),
            detail_id,
            number_of_copies: 1,
            book: book(book_id, &format!("Book {book_id}")),
        }
    }

    #[test]
    fn test_window_rejects_reversed_range() {
        let err = BorrowWindow::new(date(2024, 3, 10), date(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_single_day_window_is_valid() {
        let window = BorrowWindow::new(date(2024, 3, 1), date(2024, 3, 1)).unwrap();
        assert_eq!(window.start, window.end);
    }

    #[test]
    fn test_trailing_days_includes_today() {
        let window = BorrowWindow::trailing_days(date(2024, 3, 31), 30);
        assert_eq!(window.start, date(2024, 3, 1));
        assert_eq!(window.end, date(2024, 3, 31));
    }

    #[test]
    fn test_trailing_days_crosses_year_boundary() {
        let window = BorrowWindow::trailing_days(date(2024, 1, 10), 30);
        assert_eq!(window.start, date(2023, 12, 11));
    }

    #[test]
    fn test_group_by_record_nests_line_items() {
        let rows = vec![row(2, 5, 7), row(1, 1, 3), row(2, 4, 8), row(1, 2, 9)];
        let grouped = group_by_record(rows);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].borrowers_id, 1);
        assert_eq!(grouped[0].member_id, 11);
        let ids: Vec<_> = grouped[0].items.iter().map(|l| l.detail_id).collect();
        assert_eq!(ids, [1, 2]);

        assert_eq!(grouped[1].borrowers_id, 2);
        let books: Vec<_> = grouped[1].items.iter().map(|l| l.book.book_id).collect();
        assert_eq!(books, [8, 7]);
    }

    #[test]
    fn test_group_by_record_empty() {
        assert!(group_by_record(Vec::new()).is_empty());
    }

    #[test]
    fn test_borrowed_item_from_row() {
        let item = BorrowedItem::from(row(3, 9, 4));
        assert_eq!(item.detail_id, 9);
        assert_eq!(item.borrowers_id, 3);
        assert_eq!(item.member_id, 13);
        assert_eq!(item.book.title, "Book 4");
    }

    #[test]
    fn test_add_detail_defaults_to_one_copy() {
        let data: AddRecordDetail = serde_json::from_str(r#"{"book_id": 4}"#).unwrap();
        assert_eq!(data.number_of_copies, 1);
        assert!(data.validate().is_ok());

        let data: AddRecordDetail =
            serde_json::from_str(r#"{"book_id": 4, "number_of_copies": 0}"#).unwrap();
        assert!(data.validate().is_err());
    }
}
