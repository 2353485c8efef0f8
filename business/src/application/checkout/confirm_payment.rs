use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::store::CartStore;
use crate::domain::checkout::backend::OrderBackend;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{PaymentConfirmation, PaymentVerificationRequest};
use crate::domain::checkout::pending::PendingOrderStore;
use crate::domain::checkout::use_cases::confirm_payment::{
    ConfirmPaymentParams, ConfirmPaymentUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notice, Notifier};

pub struct ConfirmPaymentUseCaseImpl {
    pub cart: Arc<CartStore>,
    pub pending: Arc<PendingOrderStore>,
    pub backend: Arc<dyn OrderBackend>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl ConfirmPaymentUseCaseImpl {
    /// Looks the order up by payment id. Failures are logged and yield `None`.
    async fn recover_order_id(&self, payment_id: &str, status: Option<String>) -> Option<String> {
        let request = PaymentVerificationRequest {
            payment_id: payment_id.to_string(),
            payment_status: status,
        };
        match self.backend.verify_payment_by_id(&request).await {
            Ok(verification) if verification.success || verification.order_id.is_some() => {
                verification.order_id
            }
            Ok(_) => {
                self.logger
                    .warn(&format!("Payment {} could not be verified", payment_id));
                None
            }
            Err(e) => {
                self.logger
                    .error(&format!("Payment verification for {} failed: {}", payment_id, e));
                None
            }
        }
    }
}

#[async_trait]
impl ConfirmPaymentUseCase for ConfirmPaymentUseCaseImpl {
    async fn execute(
        &self,
        params: ConfirmPaymentParams,
    ) -> Result<PaymentConfirmation, CheckoutError> {
        let payment = params.payment;
        let pending_order_id = self.pending.current().await.map(|p| p.order_id);

        let order_id = match (pending_order_id, &payment.payment_id) {
            (Some(order_id), _) => Some(order_id),
            (None, Some(payment_id)) => {
                self.recover_order_id(payment_id, payment.payment_link_status.clone())
                    .await
            }
            (None, None) => {
                self.logger.warn("Payment return carries no order or payment id");
                self.notifier
                    .notify(Notice::error(CheckoutError::PaymentInfoMissing.notice_message()));
                return Err(CheckoutError::PaymentInfoMissing);
            }
        };
        let Some(order_reference) = order_id.or_else(|| payment.payment_id.clone()) else {
            return Err(CheckoutError::PaymentInfoMissing);
        };

        self.cart.clear().await;
        self.pending.forget().await;

        self.logger
            .info(&format!("Checkout completed for order {}", order_reference));
        Ok(PaymentConfirmation {
            order_reference,
            payment_id: payment.payment_id,
        })
    }
}
