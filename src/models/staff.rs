//! Library staff model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Staff record. The `auth_salt` column is never loaded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LibraryStaff {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: Option<String>,
    /// Free-form category (e.g. "librarian", "assistant")
    pub category: Option<String>,
}

/// Create staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStaff {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(length(max = 50))]
    pub mobile_number: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
}

/// Update staff request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStaff {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(length(max = 50))]
    pub mobile_number: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
}
