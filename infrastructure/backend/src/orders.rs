use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::checkout::backend::OrderBackend;
use business::domain::checkout::model::{
    CreatedOrder, NewOrder, PaymentVerification, PaymentVerificationRequest,
};
use business::domain::errors::BackendError;
use business::domain::shared::money::decimal_to_f64;

use crate::client::BackendClient;
use crate::wire::deserialize_opt_id;

#[derive(Serialize)]
struct CreateOrderRequest<'a> {
    user_id: &'a str,
    items: Vec<OrderItemDto<'a>>,
    payment_link_request: PaymentLinkRequest<'a>,
}

#[derive(Serialize)]
struct OrderItemDto<'a> {
    product_id: &'a str,
    machine_type: Option<&'a str>,
    qty: u32,
    unit_price: f64,
}

#[derive(Serialize)]
struct PaymentLinkRequest<'a> {
    customer_details: CustomerDetails<'a>,
    currency: &'a str,
}

#[derive(Serialize)]
struct CustomerDetails<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
}

impl<'a> From<&'a NewOrder> for CreateOrderRequest<'a> {
    fn from(order: &'a NewOrder) -> Self {
        Self {
            user_id: order.user_id.as_str(),
            items: order
                .lines
                .iter()
                .map(|line| OrderItemDto {
                    product_id: line.product_id.as_str(),
                    machine_type: line.machine_type.as_deref(),
                    qty: line.qty,
                    unit_price: decimal_to_f64(line.unit_price),
                })
                .collect(),
            payment_link_request: PaymentLinkRequest {
                customer_details: CustomerDetails {
                    name: order.billing.name.trim(),
                    email: order.billing.email.trim(),
                    phone: order.billing.phone.trim(),
                },
                currency: &order.currency,
            },
        }
    }
}

#[derive(Deserialize)]
struct CreateOrderResponse {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    order_id: Option<String>,
    #[serde(default)]
    payment_link: Option<String>,
}

impl TryFrom<CreateOrderResponse> for CreatedOrder {
    type Error = BackendError;

    fn try_from(response: CreateOrderResponse) -> Result<Self, Self::Error> {
        let order_id = response
            .order_id
            .ok_or_else(|| BackendError::malformed("order response has no order_id"))?;
        Ok(CreatedOrder {
            order_id,
            payment_link: response.payment_link.filter(|l| !l.trim().is_empty()),
        })
    }
}

#[derive(Serialize)]
struct VerifyPaymentRequest<'a> {
    payment_id: &'a str,
    payment_status: Option<&'a str>,
}

#[derive(Deserialize)]
struct VerifyPaymentResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    order_id: Option<String>,
}

pub struct OrderBackendHttp {
    client: BackendClient,
}

impl OrderBackendHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderBackend for OrderBackendHttp {
    async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, BackendError> {
        let url = self.client.endpoint(&["orders", "create-order"]);
        let body = CreateOrderRequest::from(order);
        let response: CreateOrderResponse =
            BackendClient::json(self.client.client.post(url).json(&body).send().await).await?;
        response.try_into()
    }

    async fn verify_payment_by_id(
        &self,
        request: &PaymentVerificationRequest,
    ) -> Result<PaymentVerification, BackendError> {
        let url = self.client.endpoint(&["orders", "verify-payment-by-id"]);
        let body = VerifyPaymentRequest {
            payment_id: &request.payment_id,
            payment_status: request.payment_status.as_deref(),
        };
        let response: VerifyPaymentResponse =
            BackendClient::json(self.client.client.post(url).json(&body).send().await).await?;
        Ok(PaymentVerification {
            success: response.success,
            order_id: response.order_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::checkout::model::{BillingDetails, OrderLine};
    use business::domain::shared::value_objects::{ProductId, UserId};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn should_serialize_order_with_payment_link_request() {
        let order = NewOrder {
            user_id: UserId::new("U1"),
            lines: vec![OrderLine {
                product_id: ProductId::new("P1"),
                machine_type: Some("DST".to_string()),
                qty: 2,
                unit_price: dec!(499.5),
            }],
            billing: BillingDetails {
                name: " Asha ".to_string(),
                email: "asha@example.com".to_string(),
                phone: "9876543210".to_string(),
            },
            currency: "INR".to_string(),
        };

        let body = serde_json::to_value(CreateOrderRequest::from(&order)).unwrap();

        assert_eq!(
            body,
            json!({
                "user_id": "U1",
                "items": [{"product_id": "P1", "machine_type": "DST", "qty": 2, "unit_price": 499.5}],
                "payment_link_request": {
                    "customer_details": {"name": "Asha", "email": "asha@example.com", "phone": "9876543210"},
                    "currency": "INR"
                }
            })
        );
    }

    #[test]
    fn should_read_numeric_order_id_and_drop_blank_link() {
        let response: CreateOrderResponse =
            serde_json::from_value(json!({"order_id": 1042, "payment_link": ""})).unwrap();

        let created = CreatedOrder::try_from(response).unwrap();

        assert_eq!(created.order_id, "1042");
        assert_eq!(created.payment_link, None);
    }

    #[test]
    fn should_reject_order_response_without_id() {
        let response: CreateOrderResponse =
            serde_json::from_value(json!({"payment_link": "https://rzp.io/l/x"})).unwrap();

        assert!(matches!(
            CreatedOrder::try_from(response),
            Err(BackendError::MalformedResponse(_))
        ));
    }

    #[test]
    fn should_default_missing_verification_fields() {
        let response: VerifyPaymentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!response.success);
        assert_eq!(response.order_id, None);
    }
}
