use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct WishlistStatusResponse {
    pub product_id: String,
    /// Whether the product is saved after the request
    pub in_wishlist: bool,
    /// Whether the request added or removed anything
    pub changed: bool,
}

impl WishlistStatusResponse {
    pub fn new(product_id: impl Into<String>, in_wishlist: bool, changed: bool) -> Self {
        Self {
            product_id: product_id.into(),
            in_wishlist,
            changed,
        }
    }
}
