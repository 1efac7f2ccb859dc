//! Library staff table

use super::{Columns, Record, Value};
use crate::models::staff::{CreateStaff, LibraryStaff, UpdateStaff};

impl Record for LibraryStaff {
    const TABLE: &'static str = "library_staff";
    const ID_COLUMN: &'static str = "staff_id";
    const NAME: &'static str = "Staff member";

    type New = CreateStaff;
    type Changes = UpdateStaff;

    fn insert_columns(new: &CreateStaff) -> Columns {
        vec![
            ("first_name", Value::Text(Some(new.first_name.clone()))),
            ("last_name", Value::Text(Some(new.last_name.clone()))),
            ("mobile_number", Value::Text(new.mobile_number.clone())),
            ("category", Value::Text(new.category.clone())),
        ]
    }

    fn update_columns(changes: &UpdateStaff) -> Columns {
        changed_columns!(changes;
            first_name => Text,
            last_name => Text,
            mobile_number => Text,
            category => Text,
        )
    }
}
