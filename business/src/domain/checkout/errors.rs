use crate::domain::errors::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.name_missing")]
    NameMissing,
    #[error("checkout.invalid_email")]
    InvalidEmail,
    #[error("checkout.invalid_phone")]
    InvalidPhone,
    #[error("checkout.user_id_missing")]
    UserIdMissing,
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.missing_payment_link")]
    MissingPaymentLink,
    #[error("checkout.payment_info_missing")]
    PaymentInfoMissing,
    #[error("backend.request_failed")]
    Backend(#[from] BackendError),
}

impl CheckoutError {
    /// The notice shown to the buyer for this failure.
    pub fn notice_message(&self) -> &'static str {
        match self {
            CheckoutError::NameMissing => "Please enter your name",
            CheckoutError::InvalidEmail => "Please enter a valid email",
            CheckoutError::InvalidPhone => "Please enter a valid phone number",
            CheckoutError::UserIdMissing => "Please login to proceed",
            CheckoutError::EmptyCart => "Your cart is empty",
            CheckoutError::MissingPaymentLink => "Error: No payment link received from server",
            CheckoutError::PaymentInfoMissing => "Payment information not found",
            CheckoutError::Backend(_) => "Failed to initiate checkout",
        }
    }
}
