//! Borrowing service: transactions, line items, and borrowing queries

use chrono::{NaiveDate, Utc};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::borrowing::{
        group_by_record, AddRecordDetail, BorrowWindow, BorrowedItem, Borrowing,
        BorrowersRecord, BorrowersRecordDetail, CreateBorrowersRecord, NewRecordDetail,
        UpdateBorrowersRecord, UpdateRecordDetail,
    },
    repository::Repository,
};

/// Length of the "recently borrowed" window, in days
pub const RECENT_DAYS: i64 = 30;

fn check_due_date(date_borrowed: NaiveDate, due_date: Option<NaiveDate>) -> AppResult<()> {
    match due_date {
        Some(due) if due < date_borrowed => Err(AppError::Validation(format!(
            "due_date: {} is before date_borrowed {}",
            due, date_borrowed
        ))),
        _ => Ok(()),
    }
}

#[derive(Clone)]
pub struct BorrowingsService {
    repository: Repository,
}

impl BorrowingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Transactions borrowed between `start` and `end`, both included
    pub async fn borrowed_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Borrowing>> {
        let window = BorrowWindow::new(start, end)?;
        self.borrowed_within(&window).await
    }

    /// Transactions borrowed in the last [`RECENT_DAYS`] days
    pub async fn borrowed_recently(&self) -> AppResult<Vec<Borrowing>> {
        let today = Utc::now().date_naive();
        let window = BorrowWindow::trailing_days(today, RECENT_DAYS);
        self.borrowed_within(&window).await
    }

    async fn borrowed_within(&self, window: &BorrowWindow) -> AppResult<Vec<Borrowing>> {
        let rows = self.repository.borrowings.borrowed_within(window).await?;
        let borrowings = group_by_record(rows);
        tracing::debug!(
            "{} borrowings between {} and {}",
            borrowings.len(),
            window.start,
            window.end
        );
        Ok(borrowings)
    }

    /// Every book line borrowed by the member. Empty when the member never borrowed.
    pub async fn borrowed_by_member(&self, member_id: i32) -> AppResult<Vec<BorrowedItem>> {
        // Verify member exists
        self.repository.members.get(member_id).await?;
        let rows = self.repository.borrowings.borrowed_by_member(member_id).await?;
        Ok(rows.into_iter().map(BorrowedItem::from).collect())
    }

    /// Every line borrowing the book. Empty when the book was never borrowed.
    pub async fn borrowed_book(&self, book_id: i32) -> AppResult<Vec<BorrowedItem>> {
        // Verify book exists
        self.repository.books.get(book_id).await?;
        let rows = self.repository.borrowings.borrowed_book(book_id).await?;
        Ok(rows.into_iter().map(BorrowedItem::from).collect())
    }

    // =========================================================================
    // TRANSACTIONS
    // =========================================================================

    pub async fn list_records(&self) -> AppResult<Vec<BorrowersRecord>> {
        self.repository.records.list().await
    }

    pub async fn get_record(&self, id: i32) -> AppResult<BorrowersRecord> {
        self.repository.records.get(id).await
    }

    /// Record a borrowing; the borrow date defaults to today
    pub async fn create_record(&self, mut data: CreateBorrowersRecord) -> AppResult<BorrowersRecord> {
        let date_borrowed = *data
            .date_borrowed
            .get_or_insert_with(|| Utc::now().date_naive());
        check_due_date(date_borrowed, data.due_date)?;

        let record = self.repository.records.insert(&data).await?;
        tracing::info!(
            "Member {} borrowing recorded as {} by staff {}",
            record.member_id,
            record.borrowers_id,
            record.staff_id
        );
        Ok(record)
    }

    pub async fn update_record(&self, id: i32, data: &UpdateBorrowersRecord) -> AppResult<BorrowersRecord> {
        if data.date_borrowed.is_some() || data.due_date.is_some() {
            let current = self.repository.records.get(id).await?;
            check_due_date(
                data.date_borrowed.unwrap_or(current.date_borrowed),
                data.due_date.or(current.due_date),
            )?;
        }
        self.repository.records.update(id, data).await
    }

    /// Delete a transaction together with its line items
    pub async fn delete_record(&self, id: i32) -> AppResult<()> {
        self.repository.records.delete(id).await?;
        tracing::info!("Deleted borrowing record {}", id);
        Ok(())
    }

    // =========================================================================
    // LINE ITEMS
    // =========================================================================

    pub async fn list_details(&self, record_id: i32) -> AppResult<Vec<BorrowersRecordDetail>> {
        self.repository.records.get(record_id).await?;
        self.repository.details.for_record(record_id).await
    }

    pub async fn get_detail(&self, id: i32) -> AppResult<BorrowersRecordDetail> {
        self.repository.details.get(id).await
    }

    pub async fn add_detail(&self, record_id: i32, data: &AddRecordDetail) -> AppResult<BorrowersRecordDetail> {
        data.validate()?;
        // A missing transaction is a 404 rather than a foreign key violation
        self.repository.records.get(record_id).await?;

        let detail = self
            .repository
            .details
            .insert(&NewRecordDetail {
                borrowers_id: record_id,
                book_id: data.book_id,
                number_of_copies: data.number_of_copies,
            })
            .await?;
        tracing::info!(
            "Added book {} x{} to borrowing record {}",
            detail.book_id,
            detail.number_of_copies,
            record_id
        );
        Ok(detail)
    }

    pub async fn update_detail(&self, id: i32, data: &UpdateRecordDetail) -> AppResult<BorrowersRecordDetail> {
        data.validate()?;
        self.repository.details.update(id, data).await
    }

    pub async fn delete_detail(&self, id: i32) -> AppResult<()> {
        self.repository.details.delete(id).await
    }
}
