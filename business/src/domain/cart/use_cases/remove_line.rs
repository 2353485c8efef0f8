use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineKey};

pub struct RemoveCartLineParams {
    pub key: LineKey,
}

#[async_trait]
pub trait RemoveCartLineUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartLineParams) -> Result<Cart, CartError>;
}
