use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::money::effective_price;

/// A machine as listed in the machinery catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachinerySnapshot {
    pub machine_id: String,
    pub name: String,
    pub unit_price: Decimal,
    #[serde(default)]
    pub discounted_unit_price: Option<Decimal>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineryBasketLine {
    pub machine_id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub unit_price: Decimal,
    #[serde(default)]
    pub discounted_unit_price: Option<Decimal>,
    pub quantity: u32,
}

impl MachineryBasketLine {
    pub fn price(&self) -> Decimal {
        effective_price(self.unit_price, self.discounted_unit_price)
    }

    pub fn subtotal(&self) -> Decimal {
        self.price() * Decimal::from(self.quantity)
    }
}

/// Machines a buyer intends to order over WhatsApp, keyed by machine id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineryBasket {
    #[serde(default)]
    items: Vec<MachineryBasketLine>,
    #[serde(default)]
    sidebar_open: bool,
}

impl MachineryBasket {
    pub fn lines(&self) -> &[MachineryBasketLine] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Adds `quantity` units of `machine`, growing its line when it is already in the basket.
    pub fn add(&mut self, machine: MachinerySnapshot, quantity: u32) -> &MachineryBasketLine {
        let quantity = quantity.max(1);
        let index = match self.position(&machine.machine_id) {
            Some(i) => {
                self.items[i].quantity = self.items[i].quantity.saturating_add(quantity);
                i
            }
            None => {
                self.items.push(MachineryBasketLine {
                    machine_id: machine.machine_id,
                    name: machine.name,
                    image_url: machine.image_url,
                    unit_price: machine.unit_price,
                    discounted_unit_price: machine.discounted_unit_price,
                    quantity,
                });
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    /// A quantity of zero or below removes the line. Unknown machines are ignored.
    pub fn update_quantity(&mut self, machine_id: &str, quantity: i64) -> bool {
        let Ok(quantity) = u32::try_from(quantity) else {
            return quantity <= 0 && self.remove(machine_id);
        };
        if quantity == 0 {
            return self.remove(machine_id);
        }
        match self.position(machine_id) {
            Some(i) => {
                self.items[i].quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, machine_id: &str) -> bool {
        match self.position(machine_id) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(MachineryBasketLine::subtotal).sum()
    }

    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, l| total.saturating_add(l.quantity))
    }

    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.sidebar_open = false;
    }

    /// Drops empty lines and merges repeated machine ids.
    pub(crate) fn normalize(self) -> Self {
        let mut basket = Self {
            items: Vec::with_capacity(self.items.len()),
            sidebar_open: self.sidebar_open,
        };
        for line in self.items.into_iter().filter(|l| l.quantity > 0) {
            match basket.position(&line.machine_id) {
                Some(i) => {
                    basket.items[i].quantity = basket.items[i].quantity.saturating_add(line.quantity)
                }
                None => basket.items.push(line),
            }
        }
        basket
    }

    fn position(&self, machine_id: &str) -> Option<usize> {
        self.items.iter().position(|l| l.machine_id == machine_id)
    }
}
