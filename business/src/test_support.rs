use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use rust_decimal::Decimal;

use crate::domain::cart::backend::{CartBackend, CartItemUpdate, CartPushItem, ServerCartLine};
use crate::domain::cart::store::CartStore;
use crate::domain::checkout::backend::OrderBackend;
use crate::domain::checkout::model::{
    CreatedOrder, NewOrder, PaymentVerification, PaymentVerificationRequest,
};
use crate::domain::errors::{BackendError, StorageError};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notice, Notifier};
use crate::domain::session::model::AuthenticatedUser;
use crate::domain::session::store::SessionStore;
use crate::domain::shared::product::ProductSnapshot;
use crate::domain::shared::value_objects::{ProductId, UserId};
use crate::domain::storage::LocalStorage;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub CartBack {}

    #[async_trait]
    impl CartBackend for CartBack {
        async fn add_items(&self, user_id: &UserId, items: &[CartPushItem]) -> Result<(), BackendError>;
        async fn fetch_items(&self, user_id: &UserId) -> Result<Vec<ServerCartLine>, BackendError>;
        async fn remove_item(&self, line_id: &str) -> Result<(), BackendError>;
        async fn update_item(&self, product_id: &ProductId, update: &CartItemUpdate) -> Result<(), BackendError>;
    }
}

mock! {
    pub OrderBack {}

    #[async_trait]
    impl OrderBackend for OrderBack {
        async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, BackendError>;
        async fn verify_payment_by_id(&self, request: &PaymentVerificationRequest) -> Result<PaymentVerification, BackendError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// `LocalStorage` kept in a map, optionally refusing writes.
#[derive(Default)]
pub struct InMemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl InMemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn failing_writes() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_writes: true,
        }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl LocalStorage for InMemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteFailed);
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// `Notifier` that keeps every notice for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

pub fn product(id: &str, price: Decimal) -> ProductSnapshot {
    ProductSnapshot {
        product_id: ProductId::new(id),
        name: format!("Design {}", id),
        price,
        discount_price: None,
        available_formats: vec!["DST".to_string(), "PES".to_string(), "JEF".to_string()],
        image_url: None,
    }
}

pub fn server_line(
    line_id: &str,
    product_id: &str,
    format: Option<&str>,
    quantity: u32,
    unit_price: Decimal,
) -> ServerCartLine {
    ServerCartLine {
        line_id: line_id.to_string(),
        product_id: ProductId::new(product_id),
        name: format!("Design {}", product_id),
        price: unit_price,
        unit_price,
        available_formats: vec!["DST".to_string(), "PES".to_string()],
        selected_format: format.map(str::to_string),
        quantity,
        image_urls: vec![],
    }
}

pub async fn cart_store() -> Arc<CartStore> {
    Arc::new(CartStore::load(Arc::new(InMemoryStorage::default()), mock_logger()).await)
}

pub async fn guest_session() -> Arc<SessionStore> {
    Arc::new(SessionStore::load(Arc::new(InMemoryStorage::default()), mock_logger()).await)
}

pub async fn signed_in_session(user_id: Option<&str>) -> Arc<SessionStore> {
    let session = guest_session().await;
    session
        .sign_in(AuthenticatedUser {
            id: user_id.map(UserId::new),
            name: Some("Asha".to_string()),
            email: "asha@example.com".to_string(),
            token: "oauth-token".to_string(),
        })
        .await;
    session
}
