//! Fixed-size pagination over an already materialized, ordered result set

use crate::error::{AppError, AppResult};

/// Number of books on one page of a listing
pub const BOOKS_PER_PAGE: usize = 30;

/// Resolve the requested page number: absent means 1, 0 is rejected.
pub fn page_number(requested: Option<u32>) -> AppResult<u32> {
    match requested {
        None => Ok(1),
        Some(0) => Err(AppError::BadRequest("Pages are numbered from 1".to_string())),
        Some(page) => Ok(page),
    }
}

/// Records `[(page-1)*per_page, page*per_page)`; empty when the page is past the end.
pub fn paginate<T>(records: Vec<T>, page: u32, per_page: usize) -> Vec<T> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(per_page);
    records.into_iter().skip(start).take(per_page).collect()
}
