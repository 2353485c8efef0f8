use std::sync::Arc;

use async_trait::async_trait;

use super::resync::{CartResync, EmptyServerCart};
use crate::domain::cart::backend::{CartBackend, CartItemUpdate};
use crate::domain::cart::errors::{CartError, USER_ID_MISSING_NOTICE};
use crate::domain::cart::model::{Cart, FormatChange};
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::change_format::{
    ChangeCartLineFormatParams, ChangeCartLineFormatUseCase,
};
use crate::domain::errors::BackendError;
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notice, Notifier};
use crate::domain::session::store::SessionStore;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct ChangeCartLineFormatUseCaseImpl {
    pub store: Arc<CartStore>,
    pub session: Arc<SessionStore>,
    pub backend: Arc<dyn CartBackend>,
    pub resync: Arc<CartResync>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl ChangeCartLineFormatUseCaseImpl {
    async fn change_on_server(
        &self,
        product_id: &ProductId,
        new_format: &str,
        user_id: &UserId,
    ) -> Result<(), BackendError> {
        let update = CartItemUpdate {
            quantity: None,
            machine_type: Some(new_format.to_string()),
        };
        self.backend.update_item(product_id, &update).await?;
        self.resync.pull(user_id, EmptyServerCart::Replace).await?;
        Ok(())
    }
}

#[async_trait]
impl ChangeCartLineFormatUseCase for ChangeCartLineFormatUseCaseImpl {
    async fn execute(&self, params: ChangeCartLineFormatParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Changing format of {} from {} to {}",
            params.product_id,
            params.old_format.as_deref().unwrap_or("no format"),
            params.new_format
        ));

        let current = self.store.snapshot().await;
        let mut preview = current.clone();
        let change = preview.change_format(
            &params.product_id,
            &params.new_format,
            params.old_format.as_deref(),
        )?;
        if change == FormatChange::Unchanged {
            return Ok(current);
        }

        if !self.session.is_authenticated().await {
            self.store
                .mutate(|cart| {
                    cart.change_format(
                        &params.product_id,
                        &params.new_format,
                        params.old_format.as_deref(),
                    )
                })
                .await?;
            self.logger.info(&format!("Cart line format changed locally: {:?}", change));
            return Ok(self.store.snapshot().await);
        }

        let Some(user_id) = self.session.user_id().await else {
            self.logger.warn("Cannot change server cart line format without a user id");
            self.notifier.notify(Notice::error(USER_ID_MISSING_NOTICE));
            return Err(CartError::UserIdMissing);
        };

        if let Err(e) = self
            .change_on_server(&params.product_id, &params.new_format, &user_id)
            .await
        {
            self.logger.error(&format!(
                "Failed to change format of {}: {}",
                params.product_id, e
            ));
            self.notifier.notify(Notice::error("Failed to update format"));
            return Err(e.into());
        }

        self.notifier.notify(Notice::success("Format updated"));
        Ok(self.store.snapshot().await)
    }
}
