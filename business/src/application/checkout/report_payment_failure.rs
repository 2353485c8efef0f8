use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::checkout::use_cases::report_payment_failure::{
    ReportPaymentFailureParams, ReportPaymentFailureUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notice, Notifier};

const DEFAULT_FAILURE_MESSAGE: &str = "Payment processing failed. Please try again.";

pub struct ReportPaymentFailureUseCaseImpl {
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReportPaymentFailureUseCase for ReportPaymentFailureUseCaseImpl {
    async fn execute(&self, params: ReportPaymentFailureParams) -> String {
        let message = params
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        self.logger.warn(&format!("Payment failed: {}", message));
        self.notifier.notify(Notice::error(message.clone()));
        message
    }
}
