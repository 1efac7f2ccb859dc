//! API handlers for Libris REST endpoints

pub mod books;
pub mod borrowings;
pub mod health;
pub mod members;
pub mod openapi;
pub mod staff;

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use serde::Serialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{error::AppError, AppState};

/// JSON body extractor; malformed bodies are answered with the error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor; unparsable segments are answered with the error envelope
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string extractor; unparsable parameters are answered with the error envelope
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Response to a successful delete
#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    /// Identifier of the deleted record
    pub deleted: i32,
}

impl DeletedResponse {
    pub fn new(id: i32) -> Self {
        Self {
            success: true,
            deleted: id,
        }
    }
}

/// Unknown route
async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

/// Give the 405 produced by method routing the same envelope as other errors
async fn method_not_allowed(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        AppError::MethodNotAllowed.into_response()
    } else {
        response
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::PUT,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books (catalog)
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/books/:id/borrowed", get(borrowings::borrowed_book))
        // Borrowing queries. Both routes below name their first parameter
        // `key`: the router rejects differently named parameters in one position.
        // Without this, the bare prefix would be read as a book id
        .route("/books/borrowed", any(not_found))
        .route(
            "/books/borrowed/last_30_days",
            get(borrowings::borrowed_last_30_days),
        )
        .route("/books/borrowed/:key", get(borrowings::borrowed_by_member))
        .route("/books/borrowed/:key/:end", get(borrowings::borrowed_between))
        // Staff
        .route("/staff", get(staff::list_staff).post(staff::create_staff))
        .route(
            "/staff/:id",
            get(staff::get_staff)
                .put(staff::update_staff)
                .delete(staff::delete_staff),
        )
        // Members
        .route("/members", get(members::list_members).post(members::create_member))
        .route(
            "/members/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
        // Borrowing transactions and line items
        .route(
            "/borrowings",
            get(borrowings::list_records).post(borrowings::create_record),
        )
        .route(
            "/borrowings/:id",
            get(borrowings::get_record)
                .put(borrowings::update_record)
                .delete(borrowings::delete_record),
        )
        .route(
            "/borrowings/:id/details",
            get(borrowings::list_details).post(borrowings::add_detail),
        )
        .route(
            "/borrowings/details/:id",
            get(borrowings::get_detail)
                .put(borrowings::update_detail)
                .delete(borrowings::delete_detail),
        )
        .layer(middleware::map_response(method_not_allowed))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
