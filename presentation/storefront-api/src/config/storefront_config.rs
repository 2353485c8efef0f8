use std::env;

/// Storefront details used outside the cart: the WhatsApp order channel and the order currency.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub store_name: String,
    pub whatsapp_number: String,
    pub currency: String,
}

impl StorefrontConfig {
    /// Environment variables:
    /// - STORE_NAME: Name shown in WhatsApp order messages (default: "OSA Embroidery")
    /// - WHATSAPP_NUMBER: Number machinery orders are sent to (default: "+918985648864")
    /// - ORDER_CURRENCY: Currency requested for payment links (default: "INR")
    pub fn from_env() -> Self {
        Self {
            store_name: env::var("STORE_NAME").unwrap_or_else(|_| "OSA Embroidery".to_string()),
            whatsapp_number: env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "+918985648864".to_string()),
            currency: env::var("ORDER_CURRENCY").unwrap_or_else(|_| "INR".to_string()),
        }
    }
}
