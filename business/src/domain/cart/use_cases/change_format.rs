use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct ChangeCartLineFormatParams {
    pub product_id: ProductId,
    pub new_format: String,
    pub old_format: Option<String>,
}

#[async_trait]
pub trait ChangeCartLineFormatUseCase: Send + Sync {
    async fn execute(&self, params: ChangeCartLineFormatParams) -> Result<Cart, CartError>;
}
