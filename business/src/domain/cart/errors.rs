use crate::domain::errors::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.line_not_found")]
    LineNotFound,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.user_id_missing")]
    UserIdMissing,
    #[error("backend.request_failed")]
    Backend(#[from] BackendError),
}

/// Notice raised when a server-side cart operation finds no stored user id.
pub const USER_ID_MISSING_NOTICE: &str = "User ID not found. Please login again.";
