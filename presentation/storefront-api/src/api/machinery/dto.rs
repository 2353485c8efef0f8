use poem_openapi::Object;

use business::domain::machinery::model::{MachineryBasket, MachineryBasketLine, MachinerySnapshot};
use business::domain::shared::money::{decimal_from_f64, decimal_to_f64};

#[derive(Debug, Clone, Object)]
pub struct AddMachineRequest {
    pub machine_id: String,
    pub name: String,
    pub unit_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub discounted_unit_price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Quantity to add (default: 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
}

impl AddMachineRequest {
    /// Splits the request into the machine and the quantity to add.
    pub fn into_parts(self) -> Result<(MachinerySnapshot, Option<u32>), &'static str> {
        if self.machine_id.trim().is_empty() {
            return Err("machinery.id_empty");
        }
        if self.quantity == Some(0) {
            return Err("machinery.invalid_quantity");
        }
        let unit_price = price(self.unit_price)?;
        let discounted_unit_price = self.discounted_unit_price.map(price).transpose()?;

        Ok((
            MachinerySnapshot {
                machine_id: self.machine_id,
                name: self.name,
                unit_price,
                discounted_unit_price,
                image_url: self.image_url,
            },
            self.quantity,
        ))
    }
}

fn price(value: f64) -> Result<rust_decimal::Decimal, &'static str> {
    decimal_from_f64(value)
        .filter(|d| !d.is_sign_negative())
        .ok_or("machinery.invalid_price")
}

#[derive(Debug, Clone, Object)]
pub struct UpdateMachineQuantityRequest {
    /// New quantity. Zero or below removes the machine.
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct BasketLineResponse {
    pub machine_id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub unit_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub discounted_unit_price: Option<f64>,
    pub quantity: u32,
    pub subtotal: f64,
}

impl From<MachineryBasketLine> for BasketLineResponse {
    fn from(line: MachineryBasketLine) -> Self {
        Self {
            subtotal: decimal_to_f64(line.subtotal()),
            machine_id: line.machine_id,
            name: line.name,
            image_url: line.image_url,
            unit_price: decimal_to_f64(line.unit_price),
            discounted_unit_price: line.discounted_unit_price.map(decimal_to_f64),
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BasketResponse {
    pub items: Vec<BasketLineResponse>,
    pub total_price: f64,
    pub total_quantity: u32,
    pub line_count: u64,
    pub sidebar_open: bool,
}

impl From<MachineryBasket> for BasketResponse {
    fn from(basket: MachineryBasket) -> Self {
        Self {
            total_price: decimal_to_f64(basket.total_price()),
            total_quantity: basket.total_quantity(),
            line_count: basket.line_count() as u64,
            sidebar_open: basket.is_sidebar_open(),
            items: basket.lines().iter().cloned().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SidebarResponse {
    pub open: bool,
}

#[derive(Debug, Clone, Object)]
pub struct OrderMessageResponse {
    /// Order text ready to send
    pub message: String,
    /// wa.me link that opens the chat with the message filled in
    pub whatsapp_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(quantity: Option<u32>) -> AddMachineRequest {
        AddMachineRequest {
            machine_id: "M1".to_string(),
            name: "Single head embroidery machine".to_string(),
            unit_price: 150000.0,
            discounted_unit_price: Some(135000.0),
            image_url: None,
            quantity,
        }
    }

    #[test]
    fn should_split_request_into_machine_and_quantity() {
        let (machine, quantity) = request(Some(2)).into_parts().unwrap();

        assert_eq!(machine.unit_price, dec!(150000));
        assert_eq!(machine.discounted_unit_price, Some(dec!(135000)));
        assert_eq!(quantity, Some(2));
    }

    #[test]
    fn should_reject_zero_quantity() {
        assert_eq!(
            request(Some(0)).into_parts().unwrap_err(),
            "machinery.invalid_quantity"
        );
    }

    #[test]
    fn should_summarize_basket() {
        let mut basket = MachineryBasket::default();
        let (machine, _) = request(None).into_parts().unwrap();
        basket.add(machine, 2);

        let response = BasketResponse::from(basket);

        assert_eq!(response.line_count, 1);
        assert_eq!(response.total_quantity, 2);
        assert_eq!(response.total_price, 270000.0);
        assert_eq!(response.items[0].subtotal, 270000.0);
        assert!(!response.sidebar_open);
    }
}
