use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::UserId;

pub struct ReconcileCartParams {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Lines pushed from the guest cart.
    pub pushed: usize,
    /// Lines the server reported afterwards.
    pub pulled: usize,
    /// Whether the local cart was replaced by the server's.
    pub replaced_local: bool,
}

/// Hands the guest cart to the server once a user signs in, then adopts the server's cart.
#[async_trait]
pub trait ReconcileCartUseCase: Send + Sync {
    async fn execute(&self, params: ReconcileCartParams) -> Result<ReconcileOutcome, CartError>;
}
