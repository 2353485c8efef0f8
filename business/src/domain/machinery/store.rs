use std::sync::Arc;

use tokio::sync::Mutex;

use super::model::{MachineryBasket, MachineryBasketLine, MachinerySnapshot};
use crate::domain::logger::Logger;
use crate::domain::storage::{LocalStorage, MACHINERY_BASKET_STORAGE_KEY, PersistedSlot};

/// Locally persisted machinery basket, including whether its sidebar is open.
pub struct MachineryBasketStore {
    basket: Mutex<MachineryBasket>,
    slot: PersistedSlot,
    logger: Arc<dyn Logger>,
}

impl MachineryBasketStore {
    pub async fn load(storage: Arc<dyn LocalStorage>, logger: Arc<dyn Logger>) -> Self {
        let slot = PersistedSlot::new(storage, MACHINERY_BASKET_STORAGE_KEY, logger.clone());
        let basket = slot
            .load::<MachineryBasket>()
            .await
            .map(MachineryBasket::normalize)
            .unwrap_or_default();
        Self {
            basket: Mutex::new(basket),
            slot,
            logger,
        }
    }

    pub async fn snapshot(&self) -> MachineryBasket {
        self.basket.lock().await.clone()
    }

    pub async fn add_item(&self, machine: MachinerySnapshot, quantity: Option<u32>) -> MachineryBasketLine {
        let line = self
            .mutate(|b| b.add(machine, quantity.unwrap_or(1)).clone())
            .await;
        self.logger.info(&format!(
            "Machine {} in basket with quantity {}",
            line.machine_id, line.quantity
        ));
        line
    }

    pub async fn update_quantity(&self, machine_id: &str, quantity: i64) -> bool {
        self.mutate(|b| b.update_quantity(machine_id, quantity)).await
    }

    pub async fn remove_item(&self, machine_id: &str) -> bool {
        let removed = self.mutate(|b| b.remove(machine_id)).await;
        if removed {
            self.logger
                .info(&format!("Machine {} removed from basket", machine_id));
        }
        removed
    }

    pub async fn toggle_sidebar(&self) -> bool {
        self.mutate(MachineryBasket::toggle_sidebar).await
    }

    pub async fn set_sidebar_open(&self, open: bool) {
        self.mutate(|b| b.set_sidebar_open(open)).await;
    }

    pub async fn is_sidebar_open(&self) -> bool {
        self.basket.lock().await.is_sidebar_open()
    }

    pub async fn clear(&self) {
        self.mutate(MachineryBasket::clear).await;
        self.logger.info("Machinery basket cleared");
    }

    async fn mutate<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut MachineryBasket) -> R + Send,
        R: Send,
    {
        let mut basket = self.basket.lock().await;
        let result = f(&mut basket);
        self.slot.save(&*basket).await;
        result
    }
}
