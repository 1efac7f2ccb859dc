//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, borrowings, health, members, staff};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Library record keeping REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Borrowing queries
        borrowings::borrowed_last_30_days,
        borrowings::borrowed_between,
        borrowings::borrowed_by_member,
        borrowings::borrowed_book,
        // Borrowing transactions
        borrowings::list_records,
        borrowings::get_record,
        borrowings::create_record,
        borrowings::update_record,
        borrowings::delete_record,
        borrowings::list_details,
        borrowings::add_detail,
        borrowings::get_detail,
        borrowings::update_detail,
        borrowings::delete_detail,
        // Staff
        staff::list_staff,
        staff::get_staff,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        // Members
        members::list_members,
        members::get_member,
        members::create_member,
        members::update_member,
        members::delete_member,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            books::BookListResponse,
            books::BookResponse,
            books::BookCreatedResponse,
            books::BookUpdatedResponse,
            books::BookDeletedResponse,
            // Borrowings
            crate::models::borrowing::BorrowersRecord,
            crate::models::borrowing::CreateBorrowersRecord,
            crate::models::borrowing::UpdateBorrowersRecord,
            crate::models::borrowing::BorrowersRecordDetail,
            crate::models::borrowing::AddRecordDetail,
            crate::models::borrowing::UpdateRecordDetail,
            crate::models::borrowing::Borrowing,
            crate::models::borrowing::BorrowedLine,
            crate::models::borrowing::BorrowedItem,
            borrowings::BorrowingsResponse,
            borrowings::BorrowedItemsResponse,
            borrowings::RecordListResponse,
            borrowings::RecordResponse,
            borrowings::RecordCreatedResponse,
            borrowings::DetailListResponse,
            borrowings::DetailResponse,
            borrowings::DetailCreatedResponse,
            // Staff
            crate::models::staff::LibraryStaff,
            crate::models::staff::CreateStaff,
            crate::models::staff::UpdateStaff,
            staff::StaffListResponse,
            staff::StaffResponse,
            staff::StaffCreatedResponse,
            // Members
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            members::MemberListResponse,
            members::MemberResponse,
            members::MemberCreatedResponse,
            // Common
            crate::api::DeletedResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "borrowings", description = "Borrowing transactions and queries"),
        (name = "staff", description = "Library staff management"),
        (name = "members", description = "Member management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
