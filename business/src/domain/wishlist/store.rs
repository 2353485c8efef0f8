use std::sync::Arc;

use tokio::sync::Mutex;

use super::model::Wishlist;
use crate::domain::logger::Logger;
use crate::domain::shared::product::ProductSnapshot;
use crate::domain::shared::value_objects::ProductId;
use crate::domain::storage::{LocalStorage, PersistedSlot, WISHLIST_STORAGE_KEY};

/// Locally persisted wishlist. Never synced to the backend.
pub struct WishlistStore {
    wishlist: Mutex<Wishlist>,
    slot: PersistedSlot,
    logger: Arc<dyn Logger>,
}

impl WishlistStore {
    pub async fn load(storage: Arc<dyn LocalStorage>, logger: Arc<dyn Logger>) -> Self {
        let slot = PersistedSlot::new(storage, WISHLIST_STORAGE_KEY, logger.clone());
        let wishlist = slot
            .load::<Wishlist>()
            .await
            .map(Wishlist::dedup)
            .unwrap_or_default();
        Self {
            wishlist: Mutex::new(wishlist),
            slot,
            logger,
        }
    }

    pub async fn entries(&self) -> Vec<ProductSnapshot> {
        self.wishlist.lock().await.entries().to_vec()
    }

    pub async fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.lock().await.contains(product_id)
    }

    pub async fn add_item(&self, product: ProductSnapshot) -> bool {
        let product_id = product.product_id.clone();
        let added = self.mutate(|w| w.add(product)).await;
        if added {
            self.logger
                .info(&format!("Product {} added to wishlist", product_id));
        }
        added
    }

    /// Removing an absent product is a no-op.
    pub async fn remove_item(&self, product_id: &ProductId) -> bool {
        let removed = self.mutate(|w| w.remove(product_id).is_some()).await;
        if removed {
            self.logger
                .info(&format!("Product {} removed from wishlist", product_id));
        }
        removed
    }

    pub async fn toggle(&self, product: ProductSnapshot) -> bool {
        self.mutate(|w| w.toggle(product)).await
    }

    pub async fn clear(&self) {
        self.mutate(Wishlist::clear).await;
        self.logger.info("Wishlist cleared");
    }

    async fn mutate<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R + Send,
        R: Send,
    {
        let mut wishlist = self.wishlist.lock().await;
        let result = f(&mut wishlist);
        self.slot.save(&*wishlist).await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryStorage, mock_logger, product};
    use rust_decimal_macros::dec;

    async fn empty_store(storage: Arc<InMemoryStorage>) -> WishlistStore {
        WishlistStore::load(storage, mock_logger()).await
    }

    #[tokio::test]
    async fn should_ignore_repeated_add() {
        let store = empty_store(Arc::new(InMemoryStorage::default())).await;

        assert!(store.add_item(product("P1", dec!(500))).await);
        assert!(!store.add_item(product("P1", dec!(450))).await);

        let entries = store.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].price, dec!(500));
    }

    #[tokio::test]
    async fn should_remove_twice_without_failing() {
        let store = empty_store(Arc::new(InMemoryStorage::default())).await;
        store.add_item(product("P1", dec!(500))).await;
        let id = ProductId::new("P1");

        assert!(store.remove_item(&id).await);
        assert!(!store.remove_item(&id).await);
        assert!(!store.is_in_wishlist(&id).await);
    }

    #[tokio::test]
    async fn should_toggle_membership() {
        let store = empty_store(Arc::new(InMemoryStorage::default())).await;
        let id = ProductId::new("P1");

        assert!(store.toggle(product("P1", dec!(500))).await);
        assert!(store.is_in_wishlist(&id).await);
        assert!(!store.toggle(product("P1", dec!(500))).await);
        assert!(!store.is_in_wishlist(&id).await);
    }

    #[tokio::test]
    async fn should_survive_reload() {
        let storage = Arc::new(InMemoryStorage::default());
        let store = empty_store(storage.clone()).await;
        store.add_item(product("P1", dec!(500))).await;
        store.add_item(product("P2", dec!(800))).await;

        let reloaded = empty_store(storage.clone()).await;

        assert_eq!(reloaded.entries().await.len(), 2);
        assert!(storage.raw(WISHLIST_STORAGE_KEY).unwrap().contains("\"items\""));
    }

    #[tokio::test]
    async fn should_empty_on_clear() {
        let store = empty_store(Arc::new(InMemoryStorage::default())).await;
        store.add_item(product("P1", dec!(500))).await;

        store.clear().await;

        assert!(store.entries().await.is_empty());
    }
}
