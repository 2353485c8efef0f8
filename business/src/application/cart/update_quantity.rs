use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartLineQuantityParams, UpdateCartLineQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartLineQuantityUseCaseImpl {
    pub store: Arc<CartStore>,
    pub remove: Arc<dyn RemoveCartLineUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartLineQuantityUseCase for UpdateCartLineQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartLineQuantityParams) -> Result<Cart, CartError> {
        if params.quantity <= 0 {
            self.logger.info(&format!(
                "Quantity {} for {} removes the line",
                params.quantity, params.key.product_id
            ));
            return self
                .remove
                .execute(RemoveCartLineParams { key: params.key })
                .await;
        }

        let quantity = u32::try_from(params.quantity).map_err(|_| CartError::InvalidQuantity)?;
        self.logger.info(&format!(
            "Setting quantity of {} to {}",
            params.key.product_id, quantity
        ));
        self.store
            .mutate(|cart| cart.set_quantity(&params.key, quantity))
            .await?;
        Ok(self.store.snapshot().await)
    }
}
