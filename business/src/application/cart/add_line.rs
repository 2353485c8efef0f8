use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_line::{AddCartLineParams, AddCartLineUseCase};
use crate::domain::logger::Logger;

pub struct AddCartLineUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartLineUseCase for AddCartLineUseCaseImpl {
    async fn execute(&self, params: AddCartLineParams) -> Result<CartLine, CartError> {
        self.logger.info(&format!(
            "Adding product {} ({}) to cart",
            params.product.product_id,
            params.selected_format.as_deref().unwrap_or("no format")
        ));

        let line = self
            .store
            .mutate(|cart| {
                cart.add_line(&params.product, params.selected_format.clone())
                    .clone()
            })
            .await;

        self.logger.debug(&format!(
            "Cart line {} now has quantity {}",
            line.product_id, line.quantity
        ));
        Ok(line)
    }
}
