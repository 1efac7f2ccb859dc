//! Member endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, UpdateMember},
    AppState,
};

use super::{ApiJson, ApiPath, DeletedResponse};

#[derive(Serialize, ToSchema)]
pub struct MemberListResponse {
    pub success: bool,
    pub members: Vec<Member>,
}

#[derive(Serialize, ToSchema)]
pub struct MemberResponse {
    pub success: bool,
    pub member: Member,
}

#[derive(Serialize, ToSchema)]
pub struct MemberCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub member: Member,
}

/// List all members
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    responses(
        (status = 200, description = "Member list", body = MemberListResponse)
    )
)]
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<MemberListResponse>> {
    let members = state.services.members.list().await?;
    Ok(Json(MemberListResponse { success: true, members }))
}

/// Get a member by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member details", body = MemberResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MemberResponse>> {
    let member = state.services.members.get_by_id(id).await?;
    Ok(Json(MemberResponse { success: true, member }))
}

/// Register a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = MemberCreatedResponse),
        (status = 422, description = "Invalid member", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateMember>,
) -> AppResult<(StatusCode, Json<MemberCreatedResponse>)> {
    let member = state.services.members.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(MemberCreatedResponse {
            success: true,
            created: member.member_id,
            member,
        }),
    ))
}

/// Update a member
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = MemberResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid member", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<UpdateMember>,
) -> AppResult<Json<MemberResponse>> {
    let member = state.services.members.update(id, &data).await?;
    Ok(Json(MemberResponse { success: true, member }))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = DeletedResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Member still has borrowing records", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<DeletedResponse>> {
    state.services.members.delete(id).await?;
    Ok(Json(DeletedResponse::new(id)))
}
