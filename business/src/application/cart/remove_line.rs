use std::sync::Arc;

use async_trait::async_trait;

use super::resync::{CartResync, EmptyServerCart};
use crate::domain::cart::backend::CartBackend;
use crate::domain::cart::errors::{CartError, USER_ID_MISSING_NOTICE};
use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use crate::domain::errors::BackendError;
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notice, Notifier};
use crate::domain::session::store::SessionStore;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveCartLineUseCaseImpl {
    pub store: Arc<CartStore>,
    pub session: Arc<SessionStore>,
    pub backend: Arc<dyn CartBackend>,
    pub resync: Arc<CartResync>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveCartLineUseCaseImpl {
    async fn remove_on_server(&self, line_id: &str, user_id: &UserId) -> Result<(), BackendError> {
        self.backend.remove_item(line_id).await?;
        self.resync.pull(user_id, EmptyServerCart::Replace).await?;
        Ok(())
    }
}

#[async_trait]
impl RemoveCartLineUseCase for RemoveCartLineUseCaseImpl {
    async fn execute(&self, params: RemoveCartLineParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing cart line {} ({})",
            params.key.product_id,
            params.key.selected_format.as_deref().unwrap_or("no format")
        ));

        let cart = self.store.snapshot().await;
        let line = cart.find(&params.key).ok_or(CartError::LineNotFound)?;

        let authenticated = self.session.is_authenticated().await;
        let server_line_id = match &line.server_line_id {
            Some(id) if authenticated => id.clone(),
            _ => {
                self.store.mutate(|cart| cart.remove_line(&params.key)).await;
                self.logger.info("Cart line removed locally");
                return Ok(self.store.snapshot().await);
            }
        };

        let Some(user_id) = self.session.user_id().await else {
            self.logger.warn("Cannot remove server cart line without a user id");
            self.notifier.notify(Notice::error(USER_ID_MISSING_NOTICE));
            return Err(CartError::UserIdMissing);
        };

        if let Err(e) = self.remove_on_server(&server_line_id, &user_id).await {
            self.logger
                .error(&format!("Failed to remove cart line {}: {}", server_line_id, e));
            self.notifier.notify(Notice::error("Failed to remove item"));
            return Err(e.into());
        }

        self.notifier.notify(Notice::success("Item removed"));
        Ok(self.store.snapshot().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::LineKey;
    use crate::domain::notifier::NoticeLevel;
    use crate::test_support::{
        MockCartBack, RecordingNotifier, cart_store, guest_session, mock_logger, product,
        server_line, signed_in_session,
    };
    use rust_decimal_macros::dec;

    fn build(
        backend: MockCartBack,
        store: Arc<CartStore>,
        session: Arc<SessionStore>,
        notifier: Arc<RecordingNotifier>,
    ) -> RemoveCartLineUseCaseImpl {
        let backend: Arc<dyn CartBackend> = Arc::new(backend);
        RemoveCartLineUseCaseImpl {
            store: store.clone(),
            session,
            backend: backend.clone(),
            resync: Arc::new(CartResync {
                backend,
                store,
                logger: mock_logger(),
            }),
            notifier,
            logger: mock_logger(),
        }
    }

    async fn store_with_server_lines() -> Arc<CartStore> {
        let store = cart_store().await;
        store
            .mutate(|cart| {
                cart.rebuild_from(&[
                    server_line("line1", "P1", Some("DST"), 2, dec!(500)),
                    server_line("line2", "P2", Some("PES"), 1, dec!(300)),
                ])
            })
            .await;
        store
    }

    #[tokio::test]
    async fn should_remove_guest_line_locally() {
        let store = cart_store().await;
        store
            .mutate(|cart| {
                cart.add_line(&product("P1", dec!(500)), Some("DST".to_string()));
                cart.add_line(&product("P1", dec!(500)), Some("PES".to_string()));
            })
            .await;
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = build(MockCartBack::new(), store, guest_session().await, notifier.clone());

        let cart = use_case
            .execute(RemoveCartLineParams {
                key: LineKey::new("P1", Some("DST".to_string())),
            })
            .await
            .unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].selected_format.as_deref(), Some("PES"));
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn should_delete_on_server_then_adopt_server_cart() {
        let mut backend = MockCartBack::new();
        backend
            .expect_remove_item()
            .withf(|line_id| line_id == "line1")
            .times(1)
            .returning(|_| Ok(()));
        backend
            .expect_fetch_items()
            .times(1)
            .returning(|_| Ok(vec![server_line("line2", "P2", Some("PES"), 1, dec!(300))]));
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = build(
            backend,
            store_with_server_lines().await,
            signed_in_session(Some("U1")).await,
            notifier.clone(),
        );

        let cart = use_case
            .execute(RemoveCartLineParams {
                key: LineKey::new("P1", Some("DST".to_string())),
            })
            .await
            .unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].server_line_id.as_deref(), Some("line2"));
        assert_eq!(notifier.messages(), vec!["Item removed".to_string()]);
    }

    #[tokio::test]
    async fn should_keep_local_cart_and_notify_when_server_delete_fails() {
        let mut backend = MockCartBack::new();
        backend
            .expect_remove_item()
            .returning(|_| Err(BackendError::unavailable("connection refused")));
        backend.expect_fetch_items().never();
        let store = store_with_server_lines().await;
        let before = store.snapshot().await;
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = build(
            backend,
            store.clone(),
            signed_in_session(Some("U1")).await,
            notifier.clone(),
        );

        let result = use_case
            .execute(RemoveCartLineParams {
                key: LineKey::new("P1", Some("DST".to_string())),
            })
            .await;

        assert!(matches!(result, Err(CartError::Backend(BackendError::Unavailable(_)))));
        assert_eq!(store.snapshot().await, before);
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Failed to remove item");
    }

    #[tokio::test]
    async fn should_short_circuit_when_user_id_is_missing() {
        let mut backend = MockCartBack::new();
        backend.expect_remove_item().never();
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = build(
            backend,
            store_with_server_lines().await,
            signed_in_session(None).await,
            notifier.clone(),
        );

        let result = use_case
            .execute(RemoveCartLineParams {
                key: LineKey::new("P1", Some("DST".to_string())),
            })
            .await;

        assert!(matches!(result, Err(CartError::UserIdMissing)));
        assert_eq!(notifier.messages(), vec![USER_ID_MISSING_NOTICE.to_string()]);
    }

    #[tokio::test]
    async fn should_report_unknown_line() {
        let use_case = build(
            MockCartBack::new(),
            cart_store().await,
            guest_session().await,
            Arc::new(RecordingNotifier::default()),
        );

        let result = use_case
            .execute(RemoveCartLineParams {
                key: LineKey::new("missing", None),
            })
            .await;

        assert!(matches!(result, Err(CartError::LineNotFound)));
    }
}
