use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::checkout::model::PaymentReturn;
use business::domain::checkout::use_cases::confirm_payment::{
    ConfirmPaymentParams, ConfirmPaymentUseCase,
};
use business::domain::checkout::use_cases::create_order::{CreateOrderParams, CreateOrderUseCase};
use business::domain::checkout::use_cases::report_payment_failure::{
    ReportPaymentFailureParams, ReportPaymentFailureUseCase,
};

use crate::api::checkout::dto::{
    BillingRequest, CheckoutResponse, PaymentFailedResponse, PaymentSuccessResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    create_order_use_case: Arc<dyn CreateOrderUseCase>,
    confirm_payment_use_case: Arc<dyn ConfirmPaymentUseCase>,
    report_failure_use_case: Arc<dyn ReportPaymentFailureUseCase>,
}

impl CheckoutApi {
    pub fn new(
        create_order_use_case: Arc<dyn CreateOrderUseCase>,
        confirm_payment_use_case: Arc<dyn ConfirmPaymentUseCase>,
        report_failure_use_case: Arc<dyn ReportPaymentFailureUseCase>,
    ) -> Self {
        Self {
            create_order_use_case,
            confirm_payment_use_case,
            report_failure_use_case,
        }
    }
}

/// Checkout and payment gateway returns
#[OpenApi]
impl CheckoutApi {
    /// Start checkout
    ///
    /// Creates an order for the current cart and returns the payment link. The cart is
    /// kept until the payment is confirmed.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn checkout(&self, body: Json<BillingRequest>) -> StartCheckoutResponse {
        let params = CreateOrderParams {
            billing: body.0.into(),
        };

        match self.create_order_use_case.execute(params).await {
            Ok(redirect) => StartCheckoutResponse::Created(Json(redirect.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => StartCheckoutResponse::BadRequest(json),
                    401 => StartCheckoutResponse::Unauthorized(json),
                    409 => StartCheckoutResponse::Conflict(json),
                    502 => StartCheckoutResponse::BadGateway(json),
                    _ => StartCheckoutResponse::InternalError(json),
                }
            }
        }
    }

    /// Payment success return
    ///
    /// Completes checkout: the cart and the pending order are cleared.
    #[oai(path = "/payment/success", method = "get", tag = "ApiTags::Checkout")]
    async fn payment_success(
        &self,
        #[oai(name = "razorpay_payment_id")] payment_id: Query<Option<String>>,
        #[oai(name = "razorpay_payment_link_id")] payment_link_id: Query<Option<String>>,
        #[oai(name = "razorpay_payment_link_status")] payment_link_status: Query<Option<String>>,
        #[oai(name = "razorpay_signature")] signature: Query<Option<String>>,
    ) -> PaymentSuccessReturn {
        let params = ConfirmPaymentParams {
            payment: PaymentReturn {
                payment_id: payment_id.0,
                payment_link_id: payment_link_id.0,
                payment_link_status: payment_link_status.0,
                signature: signature.0,
            },
        };

        match self.confirm_payment_use_case.execute(params).await {
            Ok(confirmation) => PaymentSuccessReturn::Ok(Json(confirmation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PaymentSuccessReturn::BadRequest(json),
                    _ => PaymentSuccessReturn::InternalError(json),
                }
            }
        }
    }

    /// Payment failure return
    ///
    /// Reports the gateway's error. The cart is kept so the buyer can retry.
    #[oai(path = "/payment/failed", method = "get", tag = "ApiTags::Checkout")]
    async fn payment_failed(&self, error: Query<Option<String>>) -> Json<PaymentFailedResponse> {
        let message = self
            .report_failure_use_case
            .execute(ReportPaymentFailureParams { error: error.0 })
            .await;
        Json(PaymentFailedResponse { message })
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum StartCheckoutResponse {
    #[oai(status = 201)]
    Created(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PaymentSuccessReturn {
    #[oai(status = 200)]
    Ok(Json<PaymentSuccessResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
