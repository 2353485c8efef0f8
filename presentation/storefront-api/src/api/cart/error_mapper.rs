use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CartError::LineNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "cart.line_not_found")
            }
            CartError::InvalidQuantity => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_quantity",
            ),
            CartError::UserIdMissing => error_response(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "cart.user_id_missing",
            ),
            CartError::Backend(_) => error_response(
                StatusCode::BAD_GATEWAY,
                "BackendError",
                "backend.request_failed",
            ),
        }
    }
}
