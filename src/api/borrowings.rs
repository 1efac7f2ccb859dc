//! Borrowing endpoints: borrowing queries, transactions and their line items

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::borrowing::{
        AddRecordDetail, BorrowedItem, Borrowing, BorrowersRecord, BorrowersRecordDetail,
        CreateBorrowersRecord, UpdateBorrowersRecord, UpdateRecordDetail,
    },
    AppState,
};

use super::{ApiJson, ApiPath, DeletedResponse};

/// Borrowing transactions with their books
#[derive(Serialize, ToSchema)]
pub struct BorrowingsResponse {
    pub success: bool,
    pub books: Vec<Borrowing>,
}

/// Borrowed line items with their books
#[derive(Serialize, ToSchema)]
pub struct BorrowedItemsResponse {
    pub success: bool,
    pub books: Vec<BorrowedItem>,
}

#[derive(Serialize, ToSchema)]
pub struct RecordListResponse {
    pub success: bool,
    pub records: Vec<BorrowersRecord>,
}

#[derive(Serialize, ToSchema)]
pub struct RecordResponse {
    pub success: bool,
    pub record: BorrowersRecord,
}

#[derive(Serialize, ToSchema)]
pub struct RecordCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub record: BorrowersRecord,
}

#[derive(Serialize, ToSchema)]
pub struct DetailListResponse {
    pub success: bool,
    pub details: Vec<BorrowersRecordDetail>,
}

#[derive(Serialize, ToSchema)]
pub struct DetailResponse {
    pub success: bool,
    pub detail: BorrowersRecordDetail,
}

#[derive(Serialize, ToSchema)]
pub struct DetailCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub detail: BorrowersRecordDetail,
}

// =============================================================================
// Borrowing queries
// =============================================================================

/// Books borrowed in the last 30 days
#[utoipa::path(
    get,
    path = "/books/borrowed/last_30_days",
    tag = "borrowings",
    responses(
        (status = 200, description = "Borrowings of the last 30 days, possibly empty", body = BorrowingsResponse)
    )
)]
pub async fn borrowed_last_30_days(
    State(state): State<AppState>,
) -> AppResult<Json<BorrowingsResponse>> {
    let books = state.services.borrowings.borrowed_recently().await?;
    Ok(Json(BorrowingsResponse { success: true, books }))
}

/// Books borrowed between two dates, both included
#[utoipa::path(
    get,
    path = "/books/borrowed/{start}/{end}",
    tag = "borrowings",
    params(
        ("start" = NaiveDate, Path, description = "First day (YYYY-MM-DD)"),
        ("end" = NaiveDate, Path, description = "Last day (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Borrowings in the window, possibly empty", body = BorrowingsResponse),
        (status = 400, description = "Invalid dates", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrowed_between(
    State(state): State<AppState>,
    ApiPath((start, end)): ApiPath<(NaiveDate, NaiveDate)>,
) -> AppResult<Json<BorrowingsResponse>> {
    let books = state.services.borrowings.borrowed_between(start, end).await?;
    Ok(Json(BorrowingsResponse { success: true, books }))
}

/// Books borrowed by a member
#[utoipa::path(
    get,
    path = "/books/borrowed/{member_id}",
    tag = "borrowings",
    params(("member_id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Books borrowed by the member, possibly empty", body = BorrowedItemsResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrowed_by_member(
    State(state): State<AppState>,
    ApiPath(member_id): ApiPath<i32>,
) -> AppResult<Json<BorrowedItemsResponse>> {
    let books = state.services.borrowings.borrowed_by_member(member_id).await?;
    Ok(Json(BorrowedItemsResponse { success: true, books }))
}

/// Borrowings of a book
#[utoipa::path(
    get,
    path = "/books/{id}/borrowed",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Line items borrowing the book, possibly empty", body = BorrowedItemsResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrowed_book(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<i32>,
) -> AppResult<Json<BorrowedItemsResponse>> {
    let books = state.services.borrowings.borrowed_book(book_id).await?;
    Ok(Json(BorrowedItemsResponse { success: true, books }))
}

// =============================================================================
// Transactions
// =============================================================================

/// List borrowing transactions
#[utoipa::path(
    get,
    path = "/borrowings",
    tag = "borrowings",
    responses(
        (status = 200, description = "Borrowing transactions", body = RecordListResponse)
    )
)]
pub async fn list_records(State(state): State<AppState>) -> AppResult<Json<RecordListResponse>> {
    let records = state.services.borrowings.list_records().await?;
    Ok(Json(RecordListResponse { success: true, records }))
}

/// Get a borrowing transaction
#[utoipa::path(
    get,
    path = "/borrowings/{id}",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Borrowing record ID")),
    responses(
        (status = 200, description = "Borrowing transaction", body = RecordResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<RecordResponse>> {
    let record = state.services.borrowings.get_record(id).await?;
    Ok(Json(RecordResponse { success: true, record }))
}

/// Record a borrowing transaction
#[utoipa::path(
    post,
    path = "/borrowings",
    tag = "borrowings",
    request_body = CreateBorrowersRecord,
    responses(
        (status = 201, description = "Borrowing recorded", body = RecordCreatedResponse),
        (status = 422, description = "Unknown member or staff, or invalid dates", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_record(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateBorrowersRecord>,
) -> AppResult<(StatusCode, Json<RecordCreatedResponse>)> {
    let record = state.services.borrowings.create_record(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(RecordCreatedResponse {
            success: true,
            created: record.borrowers_id,
            record,
        }),
    ))
}

/// Update a borrowing transaction
#[utoipa::path(
    put,
    path = "/borrowings/{id}",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Borrowing record ID")),
    request_body = UpdateBorrowersRecord,
    responses(
        (status = 200, description = "Borrowing updated", body = RecordResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid change", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<UpdateBorrowersRecord>,
) -> AppResult<Json<RecordResponse>> {
    let record = state.services.borrowings.update_record(id, &data).await?;
    Ok(Json(RecordResponse { success: true, record }))
}

/// Delete a borrowing transaction and its line items
#[utoipa::path(
    delete,
    path = "/borrowings/{id}",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Borrowing record ID")),
    responses(
        (status = 200, description = "Borrowing deleted", body = DeletedResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<DeletedResponse>> {
    state.services.borrowings.delete_record(id).await?;
    Ok(Json(DeletedResponse::new(id)))
}

// =============================================================================
// Line items
// =============================================================================

/// List the line items of a transaction
#[utoipa::path(
    get,
    path = "/borrowings/{id}/details",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Borrowing record ID")),
    responses(
        (status = 200, description = "Line items", body = DetailListResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_details(
    State(state): State<AppState>,
    ApiPath(record_id): ApiPath<i32>,
) -> AppResult<Json<DetailListResponse>> {
    let details = state.services.borrowings.list_details(record_id).await?;
    Ok(Json(DetailListResponse { success: true, details }))
}

/// Add a book to a transaction
#[utoipa::path(
    post,
    path = "/borrowings/{id}/details",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Borrowing record ID")),
    request_body = AddRecordDetail,
    responses(
        (status = 201, description = "Line item added", body = DetailCreatedResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Unknown book or invalid copy count", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_detail(
    State(state): State<AppState>,
    ApiPath(record_id): ApiPath<i32>,
    ApiJson(data): ApiJson<AddRecordDetail>,
) -> AppResult<(StatusCode, Json<DetailCreatedResponse>)> {
    let detail = state.services.borrowings.add_detail(record_id, &data).await?;
    Ok((
        StatusCode::CREATED,
        Json(DetailCreatedResponse {
            success: true,
            created: detail.detail_id,
            detail,
        }),
    ))
}

/// Get a line item
#[utoipa::path(
    get,
    path = "/borrowings/details/{id}",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Line item ID")),
    responses(
        (status = 200, description = "Line item", body = DetailResponse),
        (status = 404, description = "Line item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_detail(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<DetailResponse>> {
    let detail = state.services.borrowings.get_detail(id).await?;
    Ok(Json(DetailResponse { success: true, detail }))
}

/// Update a line item
#[utoipa::path(
    put,
    path = "/borrowings/details/{id}",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Line item ID")),
    request_body = UpdateRecordDetail,
    responses(
        (status = 200, description = "Line item updated", body = DetailResponse),
        (status = 404, description = "Line item not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid change", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_detail(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<UpdateRecordDetail>,
) -> AppResult<Json<DetailResponse>> {
    let detail = state.services.borrowings.update_detail(id, &data).await?;
    Ok(Json(DetailResponse { success: true, detail }))
}

/// Remove a line item
#[utoipa::path(
    delete,
    path = "/borrowings/details/{id}",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Line item ID")),
    responses(
        (status = 200, description = "Line item deleted", body = DeletedResponse),
        (status = 404, description = "Line item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_detail(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<DeletedResponse>> {
    state.services.borrowings.delete_detail(id).await?;
    Ok(Json(DeletedResponse::new(id)))
}
