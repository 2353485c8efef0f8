use poem_openapi::Object;

use business::domain::shared::money::{decimal_from_f64, decimal_to_f64};
use business::domain::shared::product::ProductSnapshot;
use business::domain::shared::value_objects::ProductId;

/// A catalog product as the storefront shows it.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product identifier
    pub product_id: String,
    /// Display name
    pub name: String,
    /// List price
    pub price: f64,
    /// Discounted price, kept only when lower than the list price
    #[oai(skip_serializing_if_is_none)]
    pub discount_price: Option<f64>,
    /// Machine formats the design ships in (DST, PES, ...)
    #[oai(default)]
    pub available_formats: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

impl ProductRequest {
    /// Rejects blank ids and prices that are negative or not finite.
    pub fn into_snapshot(self) -> Result<ProductSnapshot, &'static str> {
        if self.product_id.trim().is_empty() {
            return Err("product.id_empty");
        }
        let price = non_negative(self.price).ok_or("product.invalid_price")?;
        let discount_price = match self.discount_price {
            Some(discount) => Some(non_negative(discount).ok_or("product.invalid_price")?),
            None => None,
        };

        Ok(ProductSnapshot {
            product_id: ProductId::new(self.product_id),
            name: self.name,
            price,
            discount_price,
            available_formats: self.available_formats,
            image_url: self.image_url,
        })
    }
}

fn non_negative(value: f64) -> Option<rust_decimal::Decimal> {
    decimal_from_f64(value).filter(|d| !d.is_sign_negative())
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub discount_price: Option<f64>,
    /// Price the buyer pays
    pub effective_price: f64,
    pub available_formats: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

impl From<ProductSnapshot> for ProductResponse {
    fn from(product: ProductSnapshot) -> Self {
        Self {
            effective_price: decimal_to_f64(product.effective_price()),
            product_id: product.product_id.to_string(),
            name: product.name,
            price: decimal_to_f64(product.price),
            discount_price: product.discount_price.map(decimal_to_f64),
            available_formats: product.available_formats,
            image_url: product.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(price: f64, discount_price: Option<f64>) -> ProductRequest {
        ProductRequest {
            product_id: "P1".to_string(),
            name: "Rose border".to_string(),
            price,
            discount_price,
            available_formats: vec!["DST".to_string()],
            image_url: None,
        }
    }

    #[test]
    fn should_convert_prices_to_exact_decimals() {
        let snapshot = request(499.5, Some(399.0)).into_snapshot().unwrap();

        assert_eq!(snapshot.price, dec!(499.5));
        assert_eq!(snapshot.discount_price, Some(dec!(399)));
        assert_eq!(snapshot.effective_price(), dec!(399));
    }

    #[test]
    fn should_reject_negative_or_non_finite_prices() {
        assert_eq!(
            request(-1.0, None).into_snapshot().unwrap_err(),
            "product.invalid_price"
        );
        assert_eq!(
            request(100.0, Some(f64::NAN)).into_snapshot().unwrap_err(),
            "product.invalid_price"
        );
    }

    #[test]
    fn should_reject_blank_product_id() {
        let mut blank = request(100.0, None);
        blank.product_id = " ".to_string();

        assert_eq!(blank.into_snapshot().unwrap_err(), "product.id_empty");
    }
}
