use business::domain::errors::BackendError;
use business::domain::shared::money::decimal_from_f64;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Ids come back as strings or as bare numbers depending on the endpoint.
pub fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(id_string))
}

/// A single format or a list of formats.
pub fn deserialize_formats<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let formats = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => vec![s],
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(formats)
}

pub fn price(value: f64, field: &str) -> Result<Decimal, BackendError> {
    decimal_from_f64(value)
        .ok_or_else(|| BackendError::malformed(format!("{} is not a valid amount", field)))
}
