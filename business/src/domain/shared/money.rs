use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Picks the price a buyer actually pays: the discount when set, the list price otherwise.
pub fn effective_price(list_price: Decimal, discount_price: Option<Decimal>) -> Decimal {
    discount_price.unwrap_or(list_price)
}

/// Keeps a discount only when it really is lower than the list price.
pub fn lower_discount(list_price: Decimal, discount_price: Option<Decimal>) -> Option<Decimal> {
    discount_price.filter(|discount| *discount < list_price)
}

/// Renders an amount the way the storefront shows it, e.g. `₹500` or `₹499.5`.
pub fn format_rupees(amount: Decimal) -> String {
    format!("₹{}", amount.normalize())
}

/// Converts a JSON number into a price. Non-finite values are rejected.
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value).map(|d| d.normalize())
}

pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
