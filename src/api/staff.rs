//! Library staff endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::staff::{CreateStaff, LibraryStaff, UpdateStaff},
    AppState,
};

use super::{ApiJson, ApiPath, DeletedResponse};

#[derive(Serialize, ToSchema)]
pub struct StaffListResponse {
    pub success: bool,
    pub staff: Vec<LibraryStaff>,
}

#[derive(Serialize, ToSchema)]
pub struct StaffResponse {
    pub success: bool,
    pub staff: LibraryStaff,
}

#[derive(Serialize, ToSchema)]
pub struct StaffCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub staff: LibraryStaff,
}

/// List all staff
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    responses(
        (status = 200, description = "Staff list", body = StaffListResponse)
    )
)]
pub async fn list_staff(State(state): State<AppState>) -> AppResult<Json<StaffListResponse>> {
    let staff = state.services.staff.list().await?;
    Ok(Json(StaffListResponse { success: true, staff }))
}

/// Get a staff member by ID
#[utoipa::path(
    get,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member", body = StaffResponse),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_staff(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<StaffResponse>> {
    let staff = state.services.staff.get_by_id(id).await?;
    Ok(Json(StaffResponse { success: true, staff }))
}

/// Create a staff member
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Staff member created", body = StaffCreatedResponse),
        (status = 422, description = "Invalid staff member", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_staff(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateStaff>,
) -> AppResult<(StatusCode, Json<StaffCreatedResponse>)> {
    let staff = state.services.staff.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(StaffCreatedResponse {
            success: true,
            created: staff.staff_id,
            staff,
        }),
    ))
}

/// Update a staff member
#[utoipa::path(
    put,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = i32, Path, description = "Staff ID")),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Staff member updated", body = StaffResponse),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_staff(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<UpdateStaff>,
) -> AppResult<Json<StaffResponse>> {
    let staff = state.services.staff.update(id, &data).await?;
    Ok(Json(StaffResponse { success: true, staff }))
}

/// Delete a staff member
#[utoipa::path(
    delete,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member deleted", body = DeletedResponse),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<DeletedResponse>> {
    state.services.staff.delete(id).await?;
    Ok(Json(DeletedResponse::new(id)))
}
