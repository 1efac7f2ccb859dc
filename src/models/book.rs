//! Book (catalog) model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub edition: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    /// Number of copies owned by the library
    pub copies: i32,
    /// Unit cost. Stored as NUMERIC, written to JSON as a float for display.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub costs: Decimal,
    pub remarks: Option<String>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 50, message = "Title must be 1 to 50 characters"))]
    pub title: String,
    #[validate(length(max = 50))]
    pub edition: Option<String>,
    #[validate(length(max = 50))]
    pub author: Option<String>,
    #[validate(length(max = 50))]
    pub publisher: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Copies cannot be negative"))]
    pub copies: i32,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub costs: Decimal,
    #[validate(length(max = 50))]
    pub remarks: Option<String>,
}

/// Update book request. Fields left out keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 50, message = "Title must be 1 to 50 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 50))]
    pub edition: Option<String>,
    #[validate(length(max = 50))]
    pub author: Option<String>,
    #[validate(length(max = 50))]
    pub publisher: Option<String>,
    #[validate(range(min = 0, message = "Copies cannot be negative"))]
    pub copies: Option<i32>,
    #[schema(value_type = Option<f64>)]
    pub costs: Option<Decimal>,
    #[validate(length(max = 50))]
    pub remarks: Option<String>,
}

/// Book listing query
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Only books by this author
    pub author: Option<String>,
    /// Only books from this publisher
    pub publisher: Option<String>,
    /// Page number, starting at 1 (default: 1)
    pub page: Option<u32>,
}
