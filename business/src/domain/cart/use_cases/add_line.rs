use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::shared::product::ProductSnapshot;

pub struct AddCartLineParams {
    pub product: ProductSnapshot,
    pub selected_format: Option<String>,
}

#[async_trait]
pub trait AddCartLineUseCase: Send + Sync {
    async fn execute(&self, params: AddCartLineParams) -> Result<CartLine, CartError>;
}
