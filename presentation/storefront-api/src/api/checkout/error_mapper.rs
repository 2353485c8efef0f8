use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CheckoutError::NameMissing
            | CheckoutError::InvalidEmail
            | CheckoutError::InvalidPhone
            | CheckoutError::PaymentInfoMissing => (StatusCode::BAD_REQUEST, "ValidationError"),
            CheckoutError::UserIdMissing => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            CheckoutError::EmptyCart => (StatusCode::CONFLICT, "Conflict"),
            CheckoutError::MissingPaymentLink | CheckoutError::Backend(_) => {
                (StatusCode::BAD_GATEWAY, "BackendError")
            }
        };

        error_response(status, name, &self.to_string())
    }
}
