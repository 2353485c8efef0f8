use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::shared::product::ProductSnapshot;
use crate::domain::shared::value_objects::ProductId;

/// Saved products, at most one entry per product whatever the format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    #[serde(default)]
    items: Vec<ProductSnapshot>,
}

impl Wishlist {
    pub fn entries(&self) -> &[ProductSnapshot] {
        &self.items
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.product_id == product_id)
    }

    /// Returns `false` when the product was already saved.
    pub fn add(&mut self, product: ProductSnapshot) -> bool {
        if self.contains(&product.product_id) {
            return false;
        }
        self.items.push(product);
        true
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Option<ProductSnapshot> {
        let index = self.items.iter().position(|p| &p.product_id == product_id)?;
        Some(self.items.remove(index))
    }

    /// Adds the product if absent, removes it otherwise. Returns whether it is now saved.
    pub fn toggle(&mut self, product: ProductSnapshot) -> bool {
        if self.remove(&product.product_id).is_some() {
            return false;
        }
        self.items.push(product);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drops repeated product ids, keeping the first occurrence.
    pub(crate) fn dedup(mut self) -> Self {
        let mut seen = HashSet::new();
        self.items.retain(|p| seen.insert(p.product_id.clone()));
        self
    }
}
