use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::get::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        let cart = self.store.snapshot().await;
        self.logger
            .debug(&format!("Cart read with {} line(s)", cart.lines().len()));
        Ok(cart)
    }
}
