use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::errors::BackendError;
use crate::domain::shared::value_objects::{ProductId, UserId};

/// One entry of the batched push sent when a guest cart is handed to the server.
#[derive(Debug, Clone, PartialEq)]
pub struct CartPushItem {
    pub product_id: ProductId,
    pub selected_format: Option<String>,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// A cart line as the server reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerCartLine {
    pub line_id: String,
    pub product_id: ProductId,
    pub name: String,
    /// List price (`price`, falling back to `unit_price`).
    pub price: Decimal,
    /// Price charged per unit (`unit_price`, falling back to `price`).
    pub unit_price: Decimal,
    pub available_formats: Vec<String>,
    pub selected_format: Option<String>,
    pub quantity: u32,
    pub image_urls: Vec<String>,
}

/// Partial update of a server cart line. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartItemUpdate {
    pub quantity: Option<u32>,
    pub machine_type: Option<String>,
}

/// Port for the authenticated, server-held cart.
#[async_trait]
pub trait CartBackend: Send + Sync {
    async fn add_items(&self, user_id: &UserId, items: &[CartPushItem]) -> Result<(), BackendError>;
    async fn fetch_items(&self, user_id: &UserId) -> Result<Vec<ServerCartLine>, BackendError>;
    async fn remove_item(&self, line_id: &str) -> Result<(), BackendError>;
    async fn update_item(
        &self,
        product_id: &ProductId,
        update: &CartItemUpdate,
    ) -> Result<(), BackendError>;
}
