use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::session::errors::SessionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for SessionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            SessionError::CallbackIncomplete => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "session.callback_incomplete",
            ),
        }
    }
}
