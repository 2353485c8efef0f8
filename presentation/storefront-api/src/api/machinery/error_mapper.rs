use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::machinery::errors::MachineryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for MachineryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            MachineryError::EmptyBasket => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "machinery.empty_basket",
            ),
        }
    }
}
