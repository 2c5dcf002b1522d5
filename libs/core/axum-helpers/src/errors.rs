//! JSON error bodies and fallback handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Minimal JSON error body.
///
/// Every error response carries a single human-readable `message` field:
///
/// ```json
/// {"message": "Item not found"}
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Handler for 404 Not Found on unknown routes.
///
/// Use as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new("The requested resource was not found"));
    (StatusCode::NOT_FOUND, body).into_response()
}

/// Reusable OpenAPI response types for consistent API documentation.
pub mod responses {
    use super::ErrorResponse;
    #[allow(unused_imports)]
    use serde_json::json;
    use utoipa::ToResponse;

    #[derive(ToResponse)]
    #[response(
        description = "Resource not found",
        content_type = "application/json",
        example = json!({"message": "Item not found"})
    )]
    pub struct NotFoundResponse(pub ErrorResponse);

    #[derive(ToResponse)]
    #[response(
        description = "Bad Request - Malformed payload",
        content_type = "application/json",
        example = json!({"message": "Invalid request payload"})
    )]
    pub struct BadRequestResponse(pub ErrorResponse);

    #[derive(ToResponse)]
    #[response(
        description = "Conflict - Resource already exists",
        content_type = "application/json",
        example = json!({"message": "Item with id '42' already exists"})
    )]
    pub struct ConflictResponse(pub ErrorResponse);

    #[derive(ToResponse)]
    #[response(
        description = "Internal Server Error",
        content_type = "application/json",
        example = json!({"message": "Internal server error"})
    )]
    pub struct InternalServerErrorResponse(pub ErrorResponse);
}
