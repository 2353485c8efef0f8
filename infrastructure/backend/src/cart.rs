use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::cart::backend::{CartBackend, CartItemUpdate, CartPushItem, ServerCartLine};
use business::domain::errors::BackendError;
use business::domain::shared::money::decimal_to_f64;
use business::domain::shared::value_objects::{ProductId, UserId};

use crate::client::BackendClient;
use crate::wire::{deserialize_formats, deserialize_opt_id, price};

#[derive(Serialize)]
struct AddItemsRequest<'a> {
    user_id: &'a str,
    items: Vec<PushItemDto<'a>>,
}

#[derive(Serialize)]
struct PushItemDto<'a> {
    product_id: &'a str,
    selected_format: Option<&'a str>,
    unit_price: f64,
    quantity: u32,
}

impl<'a> From<&'a CartPushItem> for PushItemDto<'a> {
    fn from(item: &'a CartPushItem) -> Self {
        Self {
            product_id: item.product_id.as_str(),
            selected_format: item.selected_format.as_deref(),
            unit_price: decimal_to_f64(item.unit_price),
            quantity: item.quantity,
        }
    }
}

#[derive(Deserialize)]
struct CartLineDto {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    product_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    unit_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_formats")]
    machine_type: Vec<String>,
    #[serde(default)]
    selected_format: Option<String>,
    #[serde(default)]
    quantity: Option<u32>,
    #[serde(default)]
    images_urls: Option<Vec<String>>,
}

impl CartLineDto {
    fn into_line(self, key: &str) -> Result<ServerCartLine, BackendError> {
        let product_id = self
            .product_id
            .ok_or_else(|| BackendError::malformed(format!("cart line {} has no product_id", key)))?;
        let quantity = self
            .quantity
            .ok_or_else(|| BackendError::malformed(format!("cart line {} has no quantity", key)))?;
        let (list, unit) = match (self.price, self.unit_price) {
            (Some(p), Some(u)) => (p, u),
            (Some(p), None) => (p, p),
            (None, Some(u)) => (u, u),
            (None, None) => {
                return Err(BackendError::malformed(format!(
                    "cart line {} has no price",
                    key
                )));
            }
        };

        Ok(ServerCartLine {
            line_id: self.id.unwrap_or_else(|| key.to_string()),
            product_id: ProductId::new(product_id),
            name: self.name.unwrap_or_default(),
            price: price(list, "price")?,
            unit_price: price(unit, "unit_price")?,
            available_formats: self.machine_type,
            selected_format: self.selected_format.filter(|f| !f.is_empty()),
            quantity,
            image_urls: self.images_urls.unwrap_or_default(),
        })
    }
}

/// Reads the `line id → line` map returned by the cart endpoint. `null` is an empty cart.
fn parse_cart(body: Value) -> Result<Vec<ServerCartLine>, BackendError> {
    let entries = match body {
        Value::Null => return Ok(Vec::new()),
        Value::Object(entries) => entries,
        other => {
            return Err(BackendError::malformed(format!(
                "expected a map of cart lines, got {}",
                kind(&other)
            )));
        }
    };

    entries
        .into_iter()
        .map(|(key, value)| {
            let dto: CartLineDto = serde_json::from_value(value)
                .map_err(|e| BackendError::malformed(format!("cart line {}: {}", key, e)))?;
            dto.into_line(&key)
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub struct CartBackendHttp {
    client: BackendClient,
}

impl CartBackendHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartBackend for CartBackendHttp {
    async fn add_items(&self, user_id: &UserId, items: &[CartPushItem]) -> Result<(), BackendError> {
        let body = AddItemsRequest {
            user_id: user_id.as_str(),
            items: items.iter().map(PushItemDto::from).collect(),
        };
        let url = self.client.endpoint(&["cart", user_id.as_str(), "add_items"]);
        BackendClient::check(self.client.client.post(url).json(&body).send().await)?;
        Ok(())
    }

    async fn fetch_items(&self, user_id: &UserId) -> Result<Vec<ServerCartLine>, BackendError> {
        let url = self.client.endpoint(&["cart", "items", user_id.as_str()]);
        let body: Value = BackendClient::json(self.client.client.get(url).send().await).await?;
        parse_cart(body)
    }

    async fn remove_item(&self, line_id: &str) -> Result<(), BackendError> {
        let url = self.client.endpoint(&["cart", "remove_item", line_id]);
        BackendClient::check(self.client.client.delete(url).send().await)?;
        Ok(())
    }

    async fn update_item(
        &self,
        product_id: &ProductId,
        update: &CartItemUpdate,
    ) -> Result<(), BackendError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(quantity) = update.quantity {
            query.push(("quantity", quantity.to_string()));
        }
        if let Some(machine_type) = &update.machine_type {
            query.push(("machine_type", machine_type.clone()));
        }
        let url = self
            .client
            .endpoint(&["cart", "update_item", product_id.as_str()]);
        BackendClient::check(self.client.client.put(url).query(&query).send().await)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn should_parse_server_cart_map() {
        let body = json!({
            "line1": {
                "id": "line1",
                "product_id": "P1",
                "name": "Rose border",
                "price": 600.0,
                "unit_price": 500.0,
                "machine_type": ["DST", "PES"],
                "selected_format": "DST",
                "quantity": 2,
                "images_urls": ["https://cdn.example/p1.png"]
            }
        });

        let lines = parse_cart(body).unwrap();

        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.line_id, "line1");
        assert_eq!(line.product_id, ProductId::new("P1"));
        assert_eq!(line.price, dec!(600));
        assert_eq!(line.unit_price, dec!(500));
        assert_eq!(line.available_formats, vec!["DST", "PES"]);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn should_fall_back_between_price_fields_and_to_map_key() {
        let body = json!({
            "17": {"product_id": 9, "unit_price": 250, "quantity": 1}
        });

        let lines = parse_cart(body).unwrap();

        assert_eq!(lines[0].line_id, "17");
        assert_eq!(lines[0].product_id, ProductId::new("9"));
        assert_eq!(lines[0].price, dec!(250));
        assert_eq!(lines[0].unit_price, dec!(250));
        assert_eq!(lines[0].selected_format, None);
    }

    #[test]
    fn should_treat_null_body_as_empty_cart() {
        assert!(parse_cart(Value::Null).unwrap().is_empty());
        assert!(parse_cart(json!({})).unwrap().is_empty());
    }

    #[test]
    fn should_classify_unexpected_shapes_as_malformed() {
        let not_a_map = parse_cart(json!([{"product_id": "P1"}]));
        let no_quantity = parse_cart(json!({"line1": {"product_id": "P1", "price": 10}}));
        let no_price = parse_cart(json!({"line1": {"product_id": "P1", "quantity": 1}}));

        assert!(matches!(not_a_map, Err(BackendError::MalformedResponse(_))));
        assert!(matches!(no_quantity, Err(BackendError::MalformedResponse(_))));
        assert!(matches!(no_price, Err(BackendError::MalformedResponse(_))));
    }

    #[test]
    fn should_serialize_push_body() {
        let items = vec![CartPushItem {
            product_id: ProductId::new("P1"),
            selected_format: Some("DST".to_string()),
            unit_price: dec!(500),
            quantity: 1,
        }];
        let body = AddItemsRequest {
            user_id: "U1",
            items: items.iter().map(PushItemDto::from).collect(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "user_id": "U1",
                "items": [{
                    "product_id": "P1",
                    "selected_format": "DST",
                    "unit_price": 500.0,
                    "quantity": 1
                }]
            })
        );
    }
}
