use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::store::WishlistStore;

use crate::api::error::ErrorResponse;
use crate::api::product::dto::{ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::WishlistStatusResponse;

pub struct WishlistApi {
    store: Arc<WishlistStore>,
}

impl WishlistApi {
    pub fn new(store: Arc<WishlistStore>) -> Self {
        Self { store }
    }
}

/// Saved products
///
/// A product appears at most once. Adding or removing twice is harmless.
#[OpenApi]
impl WishlistApi {
    /// List saved products
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn entries(&self) -> Json<Vec<ProductResponse>> {
        let entries = self.store.entries().await;
        Json(entries.into_iter().map(Into::into).collect())
    }

    /// Save a product
    #[oai(path = "/wishlist", method = "post", tag = "ApiTags::Wishlist")]
    async fn add(&self, body: Json<ProductRequest>) -> WishlistChangeResponse {
        let product = match body.0.into_snapshot() {
            Ok(product) => product,
            Err(message) => {
                return WishlistChangeResponse::BadRequest(ErrorResponse::validation(message));
            }
        };
        let product_id = product.product_id.to_string();
        let added = self.store.add_item(product).await;
        WishlistChangeResponse::Ok(Json(WishlistStatusResponse::new(product_id, true, added)))
    }

    /// Save a product, or drop it when already saved
    #[oai(path = "/wishlist/toggle", method = "post", tag = "ApiTags::Wishlist")]
    async fn toggle(&self, body: Json<ProductRequest>) -> WishlistChangeResponse {
        let product = match body.0.into_snapshot() {
            Ok(product) => product,
            Err(message) => {
                return WishlistChangeResponse::BadRequest(ErrorResponse::validation(message));
            }
        };
        let product_id = product.product_id.to_string();
        let saved = self.store.toggle(product).await;
        WishlistChangeResponse::Ok(Json(WishlistStatusResponse::new(product_id, saved, true)))
    }

    /// Check whether a product is saved
    #[oai(path = "/wishlist/:product_id", method = "get", tag = "ApiTags::Wishlist")]
    async fn status(&self, product_id: Path<String>) -> Json<WishlistStatusResponse> {
        let saved = self.store.is_in_wishlist(&ProductId::new(product_id.0.as_str())).await;
        Json(WishlistStatusResponse::new(product_id.0, saved, false))
    }

    /// Drop a saved product
    #[oai(path = "/wishlist/:product_id", method = "delete", tag = "ApiTags::Wishlist")]
    async fn remove(&self, product_id: Path<String>) -> Json<WishlistStatusResponse> {
        let removed = self.store.remove_item(&ProductId::new(product_id.0.as_str())).await;
        Json(WishlistStatusResponse::new(product_id.0, false, removed))
    }

    /// Drop every saved product
    #[oai(path = "/wishlist", method = "delete", tag = "ApiTags::Wishlist")]
    async fn clear(&self) -> ClearWishlistResponse {
        self.store.clear().await;
        ClearWishlistResponse::NoContent
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum WishlistChangeResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistStatusResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearWishlistResponse {
    #[oai(status = 204)]
    NoContent,
}
