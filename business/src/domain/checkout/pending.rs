use std::sync::Arc;

use super::model::PendingOrder;
use crate::domain::logger::Logger;
use crate::domain::storage::{LocalStorage, PENDING_ORDER_STORAGE_KEY, PersistedSlot};

/// Remembers the order being paid for while the buyer is away at the payment gateway.
pub struct PendingOrderStore {
    slot: PersistedSlot,
}

impl PendingOrderStore {
    pub fn new(storage: Arc<dyn LocalStorage>, logger: Arc<dyn Logger>) -> Self {
        Self {
            slot: PersistedSlot::new(storage, PENDING_ORDER_STORAGE_KEY, logger),
        }
    }

    pub async fn remember(&self, order: &PendingOrder) {
        self.slot.save(order).await;
    }

    pub async fn current(&self) -> Option<PendingOrder> {
        self.slot.load().await
    }

    pub async fn forget(&self) {
        self.slot.clear().await;
    }
}
