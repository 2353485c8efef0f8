use async_trait::async_trait;

use crate::domain::session::errors::SessionError;

/// Forgets the signed-in user and empties the local cart.
#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), SessionError>;
}
