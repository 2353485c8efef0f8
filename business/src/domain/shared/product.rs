use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::effective_price;
use super::value_objects::ProductId;

/// What the storefront knows about a catalog product at the moment a buyer acts on it.
///
/// Cart lines and wishlist entries are built from this snapshot so they can be shown
/// without fetching the catalog again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    #[serde(default)]
    pub available_formats: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductSnapshot {
    pub fn effective_price(&self) -> Decimal {
        effective_price(self.price, self.discount_price)
    }
}
