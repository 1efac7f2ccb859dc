//! Members table

use super::{Columns, Record, Value};
use crate::models::member::{CreateMember, Member, UpdateMember};

impl Record for Member {
    const TABLE: &'static str = "members";
    const ID_COLUMN: &'static str = "member_id";
    const NAME: &'static str = "Member";

    type New = CreateMember;
    type Changes = UpdateMember;

    fn insert_columns(new: &CreateMember) -> Columns {
        vec![
            ("first_name", Value::Text(Some(new.first_name.clone()))),
            ("last_name", Value::Text(Some(new.last_name.clone()))),
            ("date_of_birth", Value::Date(new.date_of_birth)),
            ("gender", Value::Text(new.gender.clone())),
            ("mobile", Value::Text(new.mobile.clone())),
            ("email", Value::Text(new.email.clone())),
        ]
    }

    fn update_columns(changes: &UpdateMember) -> Columns {
        changed_columns!(changes;
            first_name => Text,
            last_name => Text,
            date_of_birth => Date,
            gender => Text,
            mobile => Text,
            email => Text,
        )
    }
}
