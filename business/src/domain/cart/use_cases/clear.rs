use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

/// Empties the local cart. Never touches the server-side cart.
#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), CartError>;
}
