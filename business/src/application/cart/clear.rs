use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<(), CartError> {
        self.logger.info("Clearing local cart");
        self.store.clear().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cart_store, mock_logger, product};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn should_empty_cart() {
        let store = cart_store().await;
        store
            .mutate(|cart| {
                cart.add_line(&product("P1", dec!(500)), None);
            })
            .await;
        let use_case = ClearCartUseCaseImpl {
            store: store.clone(),
            logger: mock_logger(),
        };

        use_case.execute().await.unwrap();

        assert!(store.snapshot().await.is_empty());
    }
}
