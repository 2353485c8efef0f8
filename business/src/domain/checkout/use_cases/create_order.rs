use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{BillingDetails, CheckoutRedirect};

pub struct CreateOrderParams {
    pub billing: BillingDetails,
}

/// Turns the current cart into an order and returns the payment link to send the buyer to.
#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<CheckoutRedirect, CheckoutError>;
}
