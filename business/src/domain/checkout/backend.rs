use async_trait::async_trait;

use super::model::{CreatedOrder, NewOrder, PaymentVerification, PaymentVerificationRequest};
use crate::domain::errors::BackendError;

/// Port for order creation and payment verification.
#[async_trait]
pub trait OrderBackend: Send + Sync {
    async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, BackendError>;
    async fn verify_payment_by_id(
        &self,
        request: &PaymentVerificationRequest,
    ) -> Result<PaymentVerification, BackendError>;
}
