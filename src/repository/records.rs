//! Borrowing transactions and their line items

use super::{Columns, Record, Table, Value};
use crate::{
    error::AppResult,
    models::borrowing::{
        BorrowersRecord, BorrowersRecordDetail, CreateBorrowersRecord, NewRecordDetail,
        UpdateBorrowersRecord, UpdateRecordDetail,
    },
};

impl Record for BorrowersRecord {
    const TABLE: &'static str = "borrowers_records";
    const ID_COLUMN: &'static str = "borrowers_id";
    const NAME: &'static str = "Borrowing record";

    type New = CreateBorrowersRecord;
    type Changes = UpdateBorrowersRecord;

    fn insert_columns(new: &CreateBorrowersRecord) -> Columns {
        vec![
            ("member_id", Value::Int(Some(new.member_id))),
            ("staff_id", Value::Int(Some(new.staff_id))),
            ("date_borrowed", Value::Date(new.date_borrowed)),
            ("due_date", Value::Date(new.due_date)),
        ]
    }

    fn update_columns(changes: &UpdateBorrowersRecord) -> Columns {
        changed_columns!(changes;
            member_id => Int,
            staff_id => Int,
            date_borrowed => Date,
            due_date => Date,
        )
    }
}

impl Record for BorrowersRecordDetail {
    const TABLE: &'static str = "borrowers_record_details";
    const ID_COLUMN: &'static str = "detail_id";
    const NAME: &'static str = "Borrowing detail";

    type New = NewRecordDetail;
    type Changes = UpdateRecordDetail;

    fn insert_columns(new: &NewRecordDetail) -> Columns {
        vec![
            ("borrowers_id", Value::Int(Some(new.borrowers_id))),
            ("book_id", Value::Int(Some(new.book_id))),
            ("number_of_copies", Value::Int(Some(new.number_of_copies))),
        ]
    }

    fn update_columns(changes: &UpdateRecordDetail) -> Columns {
        changed_columns!(changes;
            book_id => Int,
            number_of_copies => Int,
        )
    }
}

impl Table<BorrowersRecordDetail> {
    /// Line items of one transaction, ascending by id
    pub async fn for_record(&self, borrowers_id: i32) -> AppResult<Vec<BorrowersRecordDetail>> {
        let rows = sqlx::query_as::<_, BorrowersRecordDetail>(
            r#"
            SELECT * FROM borrowers_record_details
            WHERE borrowers_id = $1
            ORDER BY detail_id
            "#,
        )
        .bind(borrowers_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_record_update_keeps_unset_dates() {
        let due = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let changes = UpdateBorrowersRecord {
            due_date: Some(due),
            ..UpdateBorrowersRecord::default()
        };
        assert_eq!(
            BorrowersRecord::update_columns(&changes),
            vec![("due_date", Value::Date(Some(due)))]
        );
    }

    #[test]
    fn test_detail_insert_columns() {
        let new = NewRecordDetail {
            borrowers_id: 2,
            book_id: 7,
            number_of_copies: 1,
        };
        let names: Vec<_> = BorrowersRecordDetail::insert_columns(&new)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["borrowers_id", "book_id", "number_of_copies"]);
    }
}
