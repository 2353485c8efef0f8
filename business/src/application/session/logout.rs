use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::logout::LogoutUseCase;

pub struct LogoutUseCaseImpl {
    pub session: Arc<SessionStore>,
    pub cart: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), SessionError> {
        self.session.sign_out().await;
        self.cart.clear().await;
        self.logger.info("User signed out, local cart cleared");
        Ok(())
    }
}
