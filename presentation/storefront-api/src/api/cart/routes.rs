use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::cart::model::{Cart, LineKey};
use business::domain::cart::use_cases::add_line::{AddCartLineParams, AddCartLineUseCase};
use business::domain::cart::use_cases::change_format::{
    ChangeCartLineFormatParams, ChangeCartLineFormatUseCase,
};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartLineQuantityParams, UpdateCartLineQuantityUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{
    AddCartLineRequest, CartLineResponse, CartResponse, ChangeFormatRequest, UpdateQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_line_use_case: Arc<dyn AddCartLineUseCase>,
    remove_line_use_case: Arc<dyn RemoveCartLineUseCase>,
    change_format_use_case: Arc<dyn ChangeCartLineFormatUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartLineQuantityUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_line_use_case: Arc<dyn AddCartLineUseCase>,
        remove_line_use_case: Arc<dyn RemoveCartLineUseCase>,
        change_format_use_case: Arc<dyn ChangeCartLineFormatUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartLineQuantityUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_line_use_case,
            remove_line_use_case,
            change_format_use_case,
            update_quantity_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart API
///
/// A line is identified by its product id together with its selected format.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> GetCartResponse {
        match self.get_use_case.execute().await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a design to the cart
    ///
    /// Adding the same product in the same format again increments its quantity.
    #[oai(path = "/cart/lines", method = "post", tag = "ApiTags::Cart")]
    async fn add_line(&self, body: Json<AddCartLineRequest>) -> AddCartLineResponse {
        let product = match body.0.product.into_snapshot() {
            Ok(product) => product,
            Err(message) => {
                return AddCartLineResponse::BadRequest(ErrorResponse::validation(message));
            }
        };
        let params = AddCartLineParams {
            product,
            selected_format: body.0.selected_format,
        };

        match self.add_line_use_case.execute(params).await {
            Ok(line) => AddCartLineResponse::Created(Json(line.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartLineResponse::BadRequest(json),
                    _ => AddCartLineResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a cart line
    ///
    /// For a signed-in buyer whose line is already on the server, the removal goes through
    /// the backend and the cart is then reloaded from it.
    #[oai(path = "/cart/lines/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_line(
        &self,
        product_id: Path<String>,
        format: Query<Option<String>>,
    ) -> CartMutationResponse {
        let params = RemoveCartLineParams {
            key: LineKey::new(product_id.0, format.0),
        };
        CartMutationResponse::from_result(self.remove_line_use_case.execute(params).await)
    }

    /// Change the format of a cart line
    ///
    /// Merges into an existing line when the product is already in the cart in the new format.
    #[oai(path = "/cart/lines/:product_id/format", method = "put", tag = "ApiTags::Cart")]
    async fn change_format(
        &self,
        product_id: Path<String>,
        body: Json<ChangeFormatRequest>,
    ) -> CartMutationResponse {
        if body.0.new_format.trim().is_empty() {
            return CartMutationResponse::BadRequest(ErrorResponse::validation(
                "cart.format_empty",
            ));
        }
        let params = ChangeCartLineFormatParams {
            product_id: ProductId::new(product_id.0),
            new_format: body.0.new_format,
            old_format: body.0.old_format,
        };
        CartMutationResponse::from_result(self.change_format_use_case.execute(params).await)
    }

    /// Set the quantity of a cart line
    ///
    /// A quantity of zero or below removes the line.
    #[oai(path = "/cart/lines/:product_id/quantity", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        product_id: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> CartMutationResponse {
        let params = UpdateCartLineQuantityParams {
            key: LineKey::new(product_id.0, body.0.format),
            quantity: body.0.quantity,
        };
        CartMutationResponse::from_result(self.update_quantity_use_case.execute(params).await)
    }

    /// Empty the local cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> ClearCartResponse {
        match self.clear_use_case.execute().await {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartLineResponse {
    #[oai(status = 201)]
    Created(Json<CartLineResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartMutationResponse {
    fn from_result<E: IntoErrorResponse>(result: Result<Cart, E>) -> Self {
        match result {
            Ok(cart) => Self::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => Self::BadRequest(json),
                    401 => Self::Unauthorized(json),
                    404 => Self::NotFound(json),
                    502 => Self::BadGateway(json),
                    _ => Self::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
