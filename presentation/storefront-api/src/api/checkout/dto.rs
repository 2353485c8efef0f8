use poem_openapi::Object;

use business::domain::checkout::model::{BillingDetails, CheckoutRedirect, PaymentConfirmation};
use business::domain::shared::money::decimal_to_f64;

#[derive(Debug, Clone, Object)]
pub struct BillingRequest {
    pub name: String,
    pub email: String,
    /// At least 10 characters
    pub phone: String,
}

impl From<BillingRequest> for BillingDetails {
    fn from(request: BillingRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    pub order_id: String,
    /// Payment gateway page to send the buyer to
    pub payment_link: String,
    pub total: f64,
}

impl From<CheckoutRedirect> for CheckoutResponse {
    fn from(redirect: CheckoutRedirect) -> Self {
        Self {
            order_id: redirect.order_id,
            payment_link: redirect.payment_link,
            total: decimal_to_f64(redirect.total),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaymentSuccessResponse {
    /// Order id, or the payment id when the order could not be recovered
    pub order_reference: String,
    #[oai(skip_serializing_if_is_none)]
    pub payment_id: Option<String>,
}

impl From<PaymentConfirmation> for PaymentSuccessResponse {
    fn from(confirmation: PaymentConfirmation) -> Self {
        Self {
            order_reference: confirmation.order_reference,
            payment_id: confirmation.payment_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaymentFailedResponse {
    pub message: String,
}
