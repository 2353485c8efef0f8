use async_trait::async_trait;

use crate::domain::cart::use_cases::reconcile::ReconcileOutcome;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::AuthenticatedUser;

/// Query parameters handed back by the OAuth provider.
#[derive(Debug, Clone, Default)]
pub struct LoginParams {
    pub token: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: AuthenticatedUser,
    /// Set when the guest cart was handed to the server as part of this sign-in.
    pub reconciled: Option<ReconcileOutcome>,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<LoginOutcome, SessionError>;
}
