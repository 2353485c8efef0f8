use std::sync::Arc;

use async_trait::async_trait;

use super::resync::{CartResync, EmptyServerCart};
use crate::domain::cart::backend::CartBackend;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::reconcile::{
    ReconcileCartParams, ReconcileCartUseCase, ReconcileOutcome,
};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notice, Notifier};

pub struct ReconcileCartUseCaseImpl {
    pub store: Arc<CartStore>,
    pub backend: Arc<dyn CartBackend>,
    pub resync: Arc<CartResync>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl ReconcileCartUseCaseImpl {
    fn sync_failed(&self, error: CartError) -> CartError {
        self.logger.error(&format!("Cart reconciliation failed: {}", error));
        self.notifier.notify(Notice::error("Failed to sync cart"));
        error
    }
}

#[async_trait]
impl ReconcileCartUseCase for ReconcileCartUseCaseImpl {
    async fn execute(&self, params: ReconcileCartParams) -> Result<ReconcileOutcome, CartError> {
        let user_id = params.user_id;
        self.logger
            .info(&format!("Reconciling guest cart for user {}", user_id));

        let items = self.store.snapshot().await.push_items();
        if !items.is_empty() {
            self.backend
                .add_items(&user_id, &items)
                .await
                .map_err(|e| self.sync_failed(e.into()))?;
            self.logger
                .info(&format!("Pushed {} guest line(s) for {}", items.len(), user_id));
        }

        let resynced = self
            .resync
            .pull(&user_id, EmptyServerCart::KeepLocal)
            .await
            .map_err(|e| self.sync_failed(e.into()))?;

        Ok(ReconcileOutcome {
            pushed: items.len(),
            pulled: resynced.pulled,
            replaced_local: resynced.replaced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::backend::CartPushItem;
    use crate::domain::cart::model::LineKey;
    use crate::domain::errors::BackendError;
    use crate::domain::shared::value_objects::{ProductId, UserId};
    use crate::test_support::{
        MockCartBack, RecordingNotifier, cart_store, mock_logger, product, server_line,
    };
    use rust_decimal_macros::dec;

    fn build(
        backend: MockCartBack,
        store: Arc<CartStore>,
        notifier: Arc<RecordingNotifier>,
    ) -> ReconcileCartUseCaseImpl {
        let backend: Arc<dyn CartBackend> = Arc::new(backend);
        ReconcileCartUseCaseImpl {
            store: store.clone(),
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

    async fn guest_cart_with_two_dst_units() -> Arc<CartStore> {
        let store = cart_store().await;
        store
            .mutate(|cart| {
                let p = product("P1", dec!(500));
                cart.add_line(&p, Some("DST".to_string()));
                cart.add_line(&p, Some("DST".to_string()));
            })
            .await;
        store
    }

    #[tokio::test]
    async fn should_push_guest_lines_with_quantity_one_then_adopt_server_quantities() {
        let mut backend = MockCartBack::new();
        backend
            .expect_add_items()
            .withf(|user_id, items| {
                user_id.as_str() == "U1"
                    && items.to_vec()
                        == vec![CartPushItem {
                            product_id: ProductId::new("P1"),
                            selected_format: Some("DST".to_string()),
                            unit_price: dec!(500),
                            quantity: 1,
                        }]
            })
            .times(1)
            .returning(|_, _| Ok(()));
        backend
            .expect_fetch_items()
            .times(1)
            .returning(|_| Ok(vec![server_line("line1", "P1", Some("DST"), 2, dec!(500))]));
        let store = guest_cart_with_two_dst_units().await;
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = build(backend, store.clone(), notifier.clone());

        let outcome = use_case
            .execute(ReconcileCartParams {
                user_id: UserId::new("U1"),
            })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ReconcileOutcome {
                pushed: 1,
                pulled: 1,
                replaced_local: true,
            }
        );
        let cart = store.snapshot().await;
        assert_eq!(cart.lines().len(), 1);
        let line = cart
            .find(&LineKey::new("P1", Some("DST".to_string())))
            .unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.server_line_id.as_deref(), Some("line1"));
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn should_skip_push_for_empty_guest_cart_but_still_pull() {
        let mut backend = MockCartBack::new();
        backend.expect_add_items().never();
        backend
            .expect_fetch_items()
            .times(1)
            .returning(|_| Ok(vec![server_line("line7", "P7", None, 3, dec!(250))]));
        let store = cart_store().await;
        let use_case = build(backend, store.clone(), Arc::new(RecordingNotifier::default()));

        let outcome = use_case
            .execute(ReconcileCartParams {
                user_id: UserId::new("U1"),
            })
            .await
            .unwrap();

        assert_eq!(outcome.pushed, 0);
        assert_eq!(store.snapshot().await.item_count(), 3);
    }

    #[tokio::test]
    async fn should_keep_guest_cart_when_server_cart_is_empty() {
        let mut backend = MockCartBack::new();
        backend.expect_add_items().returning(|_, _| Ok(()));
        backend.expect_fetch_items().returning(|_| Ok(vec![]));
        let store = guest_cart_with_two_dst_units().await;
        let before = store.snapshot().await;
        let use_case = build(backend, store.clone(), Arc::new(RecordingNotifier::default()));

        let outcome = use_case
            .execute(ReconcileCartParams {
                user_id: UserId::new("U1"),
            })
            .await
            .unwrap();

        assert!(!outcome.replaced_local);
        assert_eq!(store.snapshot().await, before);
    }

    #[tokio::test]
    async fn should_abort_and_notify_when_push_fails() {
        let mut backend = MockCartBack::new();
        backend
            .expect_add_items()
            .returning(|_, _| Err(BackendError::rejected(502)));
        backend.expect_fetch_items().never();
        let store = guest_cart_with_two_dst_units().await;
        let before = store.snapshot().await;
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = build(backend, store.clone(), notifier.clone());

        let result = use_case
            .execute(ReconcileCartParams {
                user_id: UserId::new("U1"),
            })
            .await;

        assert!(matches!(
            result,
            Err(CartError::Backend(BackendError::Rejected { status: 502 }))
        ));
        assert_eq!(store.snapshot().await, before);
        assert_eq!(notifier.messages(), vec!["Failed to sync cart".to_string()]);
    }

    #[tokio::test]
    async fn should_notify_when_pull_fails() {
        let mut backend = MockCartBack::new();
        backend.expect_add_items().returning(|_, _| Ok(()));
        backend
            .expect_fetch_items()
            .returning(|_| Err(BackendError::malformed("cart body is not an object")));
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = build(
            backend,
            guest_cart_with_two_dst_units().await,
            notifier.clone(),
        );

        let result = use_case
            .execute(ReconcileCartParams {
                user_id: UserId::new("U1"),
            })
            .await;

        assert!(matches!(
            result,
            Err(CartError::Backend(BackendError::MalformedResponse(_)))
        ));
        assert_eq!(notifier.messages(), vec!["Failed to sync cart".to_string()]);
    }
}
