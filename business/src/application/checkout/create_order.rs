use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::store::CartStore;
use crate::domain::checkout::backend::OrderBackend;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CheckoutRedirect, NewOrder, OrderLine, PendingOrder};
use crate::domain::checkout::pending::PendingOrderStore;
use crate::domain::checkout::use_cases::create_order::{CreateOrderParams, CreateOrderUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notice, Notifier};
use crate::domain::session::store::SessionStore;

pub struct CreateOrderUseCaseImpl {
    pub cart: Arc<CartStore>,
    pub session: Arc<SessionStore>,
    pub backend: Arc<dyn OrderBackend>,
    pub pending: Arc<PendingOrderStore>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
    pub currency: String,
}

impl CreateOrderUseCaseImpl {
    fn reject(&self, error: CheckoutError) -> CheckoutError {
        self.logger.warn(&format!("Checkout aborted: {}", error));
        self.notifier.notify(Notice::error(error.notice_message()));
        error
    }
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<CheckoutRedirect, CheckoutError> {
        params.billing.validate().map_err(|e| self.reject(e))?;

        let user_id = self
            .session
            .user_id()
            .await
            .ok_or_else(|| self.reject(CheckoutError::UserIdMissing))?;

        let cart = self.cart.snapshot().await;
        if cart.is_empty() {
            return Err(self.reject(CheckoutError::EmptyCart));
        }
        let total = cart.total();

        self.logger.info(&format!(
            "Creating order for {} with {} line(s)",
            user_id,
            cart.lines().len()
        ));
        let order = NewOrder {
            user_id,
            lines: cart.lines().iter().map(OrderLine::from).collect(),
            billing: params.billing,
            currency: self.currency.clone(),
        };
        let created = self
            .backend
            .create_order(&order)
            .await
            .map_err(|e| self.reject(e.into()))?;

        let Some(payment_link) = created.payment_link else {
            return Err(self.reject(CheckoutError::MissingPaymentLink));
        };

        self.pending
            .remember(&PendingOrder {
                order_id: created.order_id.clone(),
                total,
            })
            .await;
        self.logger
            .info(&format!("Order {} created, awaiting payment", created.order_id));

        Ok(CheckoutRedirect {
            order_id: created.order_id,
            payment_link,
            total,
        })
    }
}
