use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::backend::{CartPushItem, ServerCartLine};
use super::errors::CartError;
use crate::domain::shared::money::{effective_price, lower_discount};
use crate::domain::shared::product::ProductSnapshot;
use crate::domain::shared::value_objects::ProductId;

/// Identity of a cart line: the same product in two formats is two lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub product_id: ProductId,
    pub selected_format: Option<String>,
}

impl LineKey {
    pub fn new(product_id: impl Into<ProductId>, selected_format: Option<String>) -> Self {
        Self {
            product_id: product_id.into(),
            selected_format,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_list_price: Decimal,
    pub unit_discount_price: Option<Decimal>,
    pub selected_format: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub available_formats: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub server_line_id: Option<String>,
}

impl CartLine {
    fn from_product(product: &ProductSnapshot, selected_format: Option<String>) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            unit_list_price: product.price,
            unit_discount_price: lower_discount(product.price, product.discount_price),
            selected_format,
            quantity: 1,
            available_formats: product.available_formats.clone(),
            image_url: product.image_url.clone(),
            server_line_id: None,
        }
    }

    fn from_server(line: &ServerCartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            unit_list_price: line.price,
            unit_discount_price: lower_discount(line.price, Some(line.unit_price)),
            selected_format: line.selected_format.clone(),
            quantity: 1,
            available_formats: line.available_formats.clone(),
            image_url: line.image_urls.first().cloned(),
            server_line_id: Some(line.line_id.clone()),
        }
    }

    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id.clone(), self.selected_format.clone())
    }

    pub fn matches(&self, key: &LineKey) -> bool {
        self.product_id == key.product_id && self.selected_format == key.selected_format
    }

    pub fn effective_price(&self) -> Decimal {
        effective_price(self.unit_list_price, self.unit_discount_price)
    }

    pub fn line_total(&self) -> Decimal {
        self.effective_price() * Decimal::from(self.quantity)
    }
}

/// How a format change landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatChange {
    /// The line already had the requested format.
    Unchanged,
    /// The line now carries the new format.
    Moved,
    /// A line with the new format existed; quantities were summed into it.
    Merged { quantity: u32 },
}

/// Shape written to local storage: `{"items": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedCart {
    #[serde(default)]
    pub items: Vec<CartLine>,
}

/// The buyer's cart. `(product_id, selected_format)` is unique and every quantity is at least 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from stored lines, dropping empty lines and merging repeated keys.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines.into_iter().filter(|l| l.quantity > 0) {
            match cart.position(&line.key()) {
                Some(i) => cart.lines[i].quantity = cart.lines[i].quantity.saturating_add(line.quantity),
                None => cart.lines.push(line),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn find(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(key))
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.lines.iter().position(|l| l.matches(key))
    }

    /// Adds one unit of `product` in `selected_format`, growing an existing line when there is one.
    pub fn add_line(&mut self, product: &ProductSnapshot, selected_format: Option<String>) -> &CartLine {
        let key = LineKey::new(product.product_id.clone(), selected_format.clone());
        let index = match self.position(&key) {
            Some(i) => {
                self.lines[i].quantity = self.lines[i].quantity.saturating_add(1);
                i
            }
            None => {
                self.lines.push(CartLine::from_product(product, selected_format));
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    pub fn remove_line(&mut self, key: &LineKey) -> Option<CartLine> {
        let index = self.position(key)?;
        Some(self.lines.remove(index))
    }

    pub fn set_quantity(&mut self, key: &LineKey, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let index = self.position(key).ok_or(CartError::LineNotFound)?;
        self.lines[index].quantity = quantity;
        Ok(())
    }

    /// Moves the `(product_id, old_format)` line to `new_format`, merging into an existing
    /// `(product_id, new_format)` line if there is one.
    pub fn change_format(
        &mut self,
        product_id: &ProductId,
        new_format: &str,
        old_format: Option<&str>,
    ) -> Result<FormatChange, CartError> {
        let source_key = LineKey::new(product_id.clone(), old_format.map(str::to_string));
        let source = self.position(&source_key).ok_or(CartError::LineNotFound)?;
        if old_format == Some(new_format) {
            return Ok(FormatChange::Unchanged);
        }

        let target_key = LineKey::new(product_id.clone(), Some(new_format.to_string()));
        match self.position(&target_key) {
            Some(target) => {
                let moved = self.lines[source].quantity;
                let quantity = self.lines[target].quantity.saturating_add(moved);
                self.lines[target].quantity = quantity;
                self.lines.remove(source);
                Ok(FormatChange::Merged { quantity })
            }
            None => {
                self.lines[source].selected_format = Some(new_format.to_string());
                Ok(FormatChange::Moved)
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Discards the local lines and rebuilds them from the server's view of the cart.
    ///
    /// Each server line is inserted at quantity 1 and then set to the quantity the server
    /// reports; a reported quantity of 0 removes the line again.
    pub fn rebuild_from(&mut self, server_lines: &[ServerCartLine]) {
        self.lines.clear();
        for server_line in server_lines {
            let line = CartLine::from_server(server_line);
            let key = line.key();
            match self.position(&key) {
                Some(i) => self.lines[i].quantity = self.lines[i].quantity.saturating_add(1),
                None => self.lines.push(line),
            }
            if self.set_quantity(&key, server_line.quantity).is_err() {
                self.remove_line(&key);
            }
        }
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Units in the cart, not lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, l| count.saturating_add(l.quantity))
    }

    /// Flattens the cart for the post-login push.
    ///
    /// Every line is sent with quantity 1 whatever its local quantity; the server's
    /// quantities are applied afterwards when the cart is pulled back.
    pub fn push_items(&self) -> Vec<CartPushItem> {
        self.lines
            .iter()
            .map(|l| CartPushItem {
                product_id: l.product_id.clone(),
                selected_format: l.selected_format.clone(),
                unit_price: l.effective_price(),
                quantity: 1,
            })
            .collect()
    }

    pub fn to_persisted(&self) -> PersistedCart {
        PersistedCart {
            items: self.lines.clone(),
        }
    }
}

impl From<PersistedCart> for Cart {
    fn from(persisted: PersistedCart) -> Self {
        Cart::from_lines(persisted.items)
    }
}
