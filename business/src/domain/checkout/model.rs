use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::CheckoutError;
use crate::domain::cart::model::CartLine;
use crate::domain::shared::value_objects::{ProductId, UserId};

const MIN_PHONE_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl BillingDetails {
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.name.trim().is_empty() {
            return Err(CheckoutError::NameMissing);
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CheckoutError::InvalidEmail);
        }
        if self.phone.trim().chars().count() < MIN_PHONE_LENGTH {
            return Err(CheckoutError::InvalidPhone);
        }
        Ok(())
    }
}

/// A purchased line as the order endpoint expects it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub machine_type: Option<String>,
    pub qty: u32,
    pub unit_price: Decimal,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            machine_type: line.selected_format.clone(),
            qty: line.quantity,
            unit_price: line.effective_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    pub billing: BillingDetails,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedOrder {
    pub order_id: String,
    pub payment_link: Option<String>,
}

/// Where to send the buyer to pay.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRedirect {
    pub order_id: String,
    pub payment_link: String,
    pub total: Decimal,
}

/// Order awaiting the payment gateway's return, kept across the redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub order_id: String,
    pub total: Decimal,
}

/// Query parameters the payment gateway appends when it sends the buyer back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentReturn {
    pub payment_id: Option<String>,
    pub payment_link_id: Option<String>,
    pub payment_link_status: Option<String>,
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentVerificationRequest {
    pub payment_id: String,
    pub payment_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentVerification {
    pub success: bool,
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfirmation {
    /// Order id when known, otherwise the gateway's payment id.
    pub order_reference: String,
    pub payment_id: Option<String>,
}
