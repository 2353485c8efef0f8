use std::sync::Arc;

use tokio::sync::Mutex;

use super::model::{Cart, PersistedCart};
use crate::domain::logger::Logger;
use crate::domain::storage::{CART_STORAGE_KEY, LocalStorage, PersistedSlot};

/// State container for the local cart.
///
/// Every mutation is written back to local storage before the lock is released.
/// The lock only covers local work: callers must not hold it across backend calls.
pub struct CartStore {
    cart: Mutex<Cart>,
    slot: PersistedSlot,
}

impl CartStore {
    /// Rehydrates the cart from local storage, starting empty when nothing usable is stored.
    pub async fn load(storage: Arc<dyn LocalStorage>, logger: Arc<dyn Logger>) -> Self {
        let slot = PersistedSlot::new(storage, CART_STORAGE_KEY, logger.clone());
        let cart = slot
            .load::<PersistedCart>()
            .await
            .map(Cart::from)
            .unwrap_or_default();
        logger.debug(&format!("Cart rehydrated with {} line(s)", cart.lines().len()));
        Self {
            cart: Mutex::new(cart),
            slot,
        }
    }

    pub async fn snapshot(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Applies `f` to the cart and persists the result.
    pub async fn mutate<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R + Send,
        R: Send,
    {
        let mut cart = self.cart.lock().await;
        let result = f(&mut cart);
        self.slot.save(&cart.to_persisted()).await;
        result
    }

    /// Empties the cart and drops its storage entry.
    pub async fn clear(&self) {
        let mut cart = self.cart.lock().await;
        cart.clear();
        self.slot.clear().await;
    }
}
