use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{PaymentConfirmation, PaymentReturn};

pub struct ConfirmPaymentParams {
    pub payment: PaymentReturn,
}

/// Completes checkout once the payment gateway reports success.
#[async_trait]
pub trait ConfirmPaymentUseCase: Send + Sync {
    async fn execute(&self, params: ConfirmPaymentParams)
    -> Result<PaymentConfirmation, CheckoutError>;
}
