use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::errors::StorageError;
use crate::domain::logger::Logger;

pub const CART_STORAGE_KEY: &str = "osa-cart-storage";
pub const WISHLIST_STORAGE_KEY: &str = "osa-wishlist-storage";
pub const MACHINERY_BASKET_STORAGE_KEY: &str = "osa-machinery-basket-storage";
pub const AUTH_STORAGE_KEY: &str = "osa-auth-storage";
pub const USER_ID_STORAGE_KEY: &str = "osa-userId";
pub const PENDING_ORDER_STORAGE_KEY: &str = "osa-pending-order";

/// Port for the client's persistent key/value storage.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// One storage key bound to its store.
///
/// Reads that fail or do not parse are treated as absent. Writes are best-effort:
/// a failed write is logged and the in-memory state stays authoritative.
pub struct PersistedSlot {
    storage: Arc<dyn LocalStorage>,
    key: &'static str,
    logger: Arc<dyn Logger>,
}

impl PersistedSlot {
    pub fn new(storage: Arc<dyn LocalStorage>, key: &'static str, logger: Arc<dyn Logger>) -> Self {
        Self {
            storage,
            key,
            logger,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub async fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = self.load_raw().await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                self.logger
                    .warn(&format!("Discarding unreadable state under '{}': {}", self.key, e));
                None
            }
        }
    }

    pub async fn save<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.save_raw(&raw).await,
            Err(e) => self
                .logger
                .warn(&format!("Could not serialize state for '{}': {}", self.key, e)),
        }
    }

    pub async fn load_raw(&self) -> Option<String> {
        match self.storage.get_item(self.key).await {
            Ok(value) => value,
            Err(e) => {
                self.logger
                    .warn(&format!("Could not read '{}' from local storage: {}", self.key, e));
                None
            }
        }
    }

    pub async fn save_raw(&self, raw: &str) {
        if let Err(e) = self.storage.set_item(self.key, raw).await {
            self.logger
                .warn(&format!("Could not write '{}' to local storage: {}", self.key, e));
        }
    }

    pub async fn clear(&self) {
        if let Err(e) = self.storage.remove_item(self.key).await {
            self.logger
                .warn(&format!("Could not remove '{}' from local storage: {}", self.key, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryStorage, mock_logger};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Flags {
        open: bool,
    }

    #[tokio::test]
    async fn should_round_trip_json_state() {
        let storage = Arc::new(InMemoryStorage::default());
        let slot = PersistedSlot::new(storage.clone(), "flags", mock_logger());

        slot.save(&Flags { open: true }).await;

        assert_eq!(storage.raw("flags").as_deref(), Some(r#"{"open":true}"#));
        assert_eq!(slot.load::<Flags>().await, Some(Flags { open: true }));
    }

    #[tokio::test]
    async fn should_treat_unparseable_state_as_absent() {
        let storage = Arc::new(InMemoryStorage::with_entry("flags", "{not json"));
        let slot = PersistedSlot::new(storage, "flags", mock_logger());

        assert_eq!(slot.load::<Flags>().await, None);
    }

    #[tokio::test]
    async fn should_swallow_write_failures() {
        let storage = Arc::new(InMemoryStorage::failing_writes());
        let slot = PersistedSlot::new(storage.clone(), "flags", mock_logger());

        slot.save(&Flags { open: false }).await;

        assert_eq!(storage.raw("flags"), None);
    }

    #[tokio::test]
    async fn should_remove_key_on_clear() {
        let storage = Arc::new(InMemoryStorage::with_entry("flags", r#"{"open":true}"#));
        let slot = PersistedSlot::new(storage.clone(), "flags", mock_logger());

        slot.clear().await;

        assert_eq!(storage.raw("flags"), None);
    }
}
