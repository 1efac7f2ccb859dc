//! Borrowing queries: transactions joined with their line items and books

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::borrowing::{BorrowWindow, BorrowingRow},
};

const BORROWING_COLUMNS: &str = r#"
    SELECT r.borrowers_id, r.member_id, r.staff_id, r.date_borrowed, r.due_date,
           d.detail_id, d.number_of_copies,
           b.book_id, b.title, b.edition, b.author, b.publisher, b.copies, b.costs, b.remarks
    FROM borrowers_records r
    JOIN borrowers_record_details d ON d.borrowers_id = r.borrowers_id
    JOIN books b ON b.book_id = d.book_id
"#;

#[derive(Clone)]
pub struct BorrowingsRepository {
    pool: Pool<Postgres>,
}

impl BorrowingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Rows of transactions borrowed within the window (both ends included)
    pub async fn borrowed_within(&self, window: &BorrowWindow) -> AppResult<Vec<BorrowingRow>> {
        let query = format!(
            "{} WHERE r.date_borrowed BETWEEN $1 AND $2 ORDER BY r.borrowers_id, d.detail_id",
            BORROWING_COLUMNS
        );
        let rows = sqlx::query_as::<_, BorrowingRow>(&query)
            .bind(window.start)
            .bind(window.end)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Rows of every transaction initiated by the member
    pub async fn borrowed_by_member(&self, member_id: i32) -> AppResult<Vec<BorrowingRow>> {
        let query = format!(
            "{} WHERE r.member_id = $1 ORDER BY r.borrowers_id, d.detail_id",
            BORROWING_COLUMNS
        );
        let rows = sqlx::query_as::<_, BorrowingRow>(&query)
            .bind(member_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Rows of every line item referencing the book
    pub async fn borrowed_book(&self, book_id: i32) -> AppResult<Vec<BorrowingRow>> {
        let query = format!(
            "{} WHERE d.book_id = $1 ORDER BY r.borrowers_id, d.detail_id",
            BORROWING_COLUMNS
        );
        let rows = sqlx::query_as::<_, BorrowingRow>(&query)
            .bind(book_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
