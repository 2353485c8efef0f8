use serde::{Deserialize, Serialize};

/// Identifier the OAuth callback hands back for the signed-in customer.
/// Used to address the customer's server-side cart and orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Catalog product identifier, stable across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("U1");
        assert_eq!(format!("{}", user_id), "U1");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new("same"), UserId::from("same"));
        assert_ne!(UserId::new("same"), UserId::new("other"));
    }

    #[test]
    fn should_serialize_product_id_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("P1")).unwrap();
        assert_eq!(json, "\"P1\"");

        let parsed: ProductId = serde_json::from_str("\"P2\"").unwrap();
        assert_eq!(parsed.as_str(), "P2");
    }
}
