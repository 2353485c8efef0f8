use async_trait::async_trait;

pub struct ReportPaymentFailureParams {
    /// The gateway's `error` query parameter, if any.
    pub error: Option<String>,
}

#[async_trait]
pub trait ReportPaymentFailureUseCase: Send + Sync {
    /// Returns the message shown to the buyer. The cart is left as it is.
    async fn execute(&self, params: ReportPaymentFailureParams) -> String;
}
