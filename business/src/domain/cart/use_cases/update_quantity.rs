use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineKey};

pub struct UpdateCartLineQuantityParams {
    pub key: LineKey,
    /// Zero or below removes the line.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateCartLineQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartLineQuantityParams) -> Result<Cart, CartError>;
}
