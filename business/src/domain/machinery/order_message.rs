use chrono::NaiveDate;
use url::Url;

use super::errors::MachineryError;
use super::model::MachineryBasket;
use crate::domain::shared::money::format_rupees;

const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━";

/// Builds the WhatsApp order request for everything in `basket`.
pub fn order_message(
    basket: &MachineryBasket,
    store_name: &str,
    date: NaiveDate,
) -> Result<String, MachineryError> {
    if basket.is_empty() {
        return Err(MachineryError::EmptyBasket);
    }

    let mut lines = vec![
        format!("*{} - Machinery Order Request*", store_name),
        format!("📅 Date: {}", date.format("%-d/%-m/%Y")),
        SEPARATOR.to_string(),
        String::new(),
        "*Order Items:*".to_string(),
    ];
    for (index, line) in basket.lines().iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, line.name));
        lines.push(format!("   Quantity: {}", line.quantity));
        lines.push(format!(
            "   Price: {} × {} = {}",
            format_rupees(line.price()),
            line.quantity,
            format_rupees(line.subtotal())
        ));
        lines.push(String::new());
    }
    lines.extend([
        SEPARATOR.to_string(),
        format!("*Total Amount: {}*", format_rupees(basket.total_price())),
        String::new(),
        "*Please Provide:*".to_string(),
        "• Delivery Address".to_string(),
        "• Contact Number".to_string(),
        "• Preferred Delivery Date".to_string(),
        String::new(),
        format!("*Thank you for choosing {}!*", store_name),
        "We will get back to you shortly with quotation and delivery details.".to_string(),
    ]);

    Ok(lines.join("\n"))
}

/// `https://wa.me/<digits>?text=<message>`, keeping only the digits of `number`.
pub fn whatsapp_link(number: &str, message: &str) -> Result<Url, url::ParseError> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    Url::parse_with_params(&format!("https://wa.me/{}", digits), &[("text", message)])
}
