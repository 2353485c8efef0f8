use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};
use business::domain::cart::use_cases::reconcile::ReconcileOutcome;
use business::domain::shared::money::decimal_to_f64;

use crate::api::product::dto::ProductRequest;

#[derive(Debug, Clone, Object)]
pub struct AddCartLineRequest {
    pub product: ProductRequest,
    /// Format to add the design in. Omitted for products without formats.
    #[oai(skip_serializing_if_is_none)]
    pub selected_format: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ChangeFormatRequest {
    /// Format the line currently has
    #[oai(skip_serializing_if_is_none)]
    pub old_format: Option<String>,
    /// Format to switch to
    pub new_format: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// Format of the line to update
    #[oai(skip_serializing_if_is_none)]
    pub format: Option<String>,
    /// New quantity. Zero or below removes the line.
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub product_id: String,
    pub name: String,
    pub unit_list_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub unit_discount_price: Option<f64>,
    /// Price charged per unit
    pub effective_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub selected_format: Option<String>,
    pub quantity: u32,
    pub line_total: f64,
    pub available_formats: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Identifier of the matching server cart line, once synced
    #[oai(skip_serializing_if_is_none)]
    pub server_line_id: Option<String>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            effective_price: decimal_to_f64(line.effective_price()),
            line_total: decimal_to_f64(line.line_total()),
            product_id: line.product_id.to_string(),
            name: line.name,
            unit_list_price: decimal_to_f64(line.unit_list_price),
            unit_discount_price: line.unit_discount_price.map(decimal_to_f64),
            selected_format: line.selected_format,
            quantity: line.quantity,
            available_formats: line.available_formats,
            image_url: line.image_url,
            server_line_id: line.server_line_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    /// Sum of every line total
    pub total: f64,
    /// Sum of every line quantity
    pub item_count: u32,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total: decimal_to_f64(cart.total()),
            item_count: cart.item_count(),
            items: cart.lines().iter().cloned().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ReconcileResponse {
    pub pushed: u64,
    pub pulled: u64,
    pub replaced_local: bool,
}

impl From<ReconcileOutcome> for ReconcileResponse {
    fn from(outcome: ReconcileOutcome) -> Self {
        Self {
            pushed: outcome.pushed as u64,
            pulled: outcome.pulled as u64,
            replaced_local: outcome.replaced_local,
        }
    }
}
