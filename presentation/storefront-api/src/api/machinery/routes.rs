use std::sync::Arc;

use chrono::Local;
use poem::http::StatusCode;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::machinery::order_message::{order_message, whatsapp_link};
use business::domain::machinery::store::MachineryBasketStore;
use business::domain::notifier::{Notice, Notifier};

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};
use crate::api::machinery::dto::{
    AddMachineRequest, BasketLineResponse, BasketResponse, OrderMessageResponse, SidebarResponse,
    UpdateMachineQuantityRequest,
};
use crate::api::tags::ApiTags;

pub struct MachineryApi {
    store: Arc<MachineryBasketStore>,
    notifier: Arc<dyn Notifier>,
    store_name: String,
    whatsapp_number: String,
}

impl MachineryApi {
    pub fn new(
        store: Arc<MachineryBasketStore>,
        notifier: Arc<dyn Notifier>,
        store_name: String,
        whatsapp_number: String,
    ) -> Self {
        Self {
            store,
            notifier,
            store_name,
            whatsapp_number,
        }
    }
}

/// Machinery basket
///
/// Machines are ordered over WhatsApp rather than through checkout.
#[OpenApi]
impl MachineryApi {
    /// Get the basket
    #[oai(path = "/machinery-basket", method = "get", tag = "ApiTags::Machinery")]
    async fn get(&self) -> Json<BasketResponse> {
        Json(self.store.snapshot().await.into())
    }

    /// Add a machine
    ///
    /// Adding a machine already in the basket increases its quantity.
    #[oai(path = "/machinery-basket/items", method = "post", tag = "ApiTags::Machinery")]
    async fn add_item(&self, body: Json<AddMachineRequest>) -> AddMachineResponse {
        match body.0.into_parts() {
            Ok((machine, quantity)) => {
                let line = self.store.add_item(machine, quantity).await;
                AddMachineResponse::Created(Json(line.into()))
            }
            Err(message) => AddMachineResponse::BadRequest(ErrorResponse::validation(message)),
        }
    }

    /// Set the quantity of a machine
    ///
    /// A quantity of zero or below removes it.
    #[oai(
        path = "/machinery-basket/items/:machine_id",
        method = "put",
        tag = "ApiTags::Machinery"
    )]
    async fn update_quantity(
        &self,
        machine_id: Path<String>,
        body: Json<UpdateMachineQuantityRequest>,
    ) -> BasketChangeResponse {
        if self.store.update_quantity(&machine_id.0, body.0.quantity).await {
            BasketChangeResponse::Ok(Json(self.store.snapshot().await.into()))
        } else {
            BasketChangeResponse::not_found()
        }
    }

    /// Remove a machine
    #[oai(
        path = "/machinery-basket/items/:machine_id",
        method = "delete",
        tag = "ApiTags::Machinery"
    )]
    async fn remove_item(&self, machine_id: Path<String>) -> BasketChangeResponse {
        if self.store.remove_item(&machine_id.0).await {
            BasketChangeResponse::Ok(Json(self.store.snapshot().await.into()))
        } else {
            BasketChangeResponse::not_found()
        }
    }

    /// Open or close the basket sidebar
    #[oai(
        path = "/machinery-basket/sidebar/toggle",
        method = "post",
        tag = "ApiTags::Machinery"
    )]
    async fn toggle_sidebar(&self) -> Json<SidebarResponse> {
        Json(SidebarResponse {
            open: self.store.toggle_sidebar().await,
        })
    }

    /// Empty the basket
    ///
    /// Also closes the sidebar.
    #[oai(path = "/machinery-basket", method = "delete", tag = "ApiTags::Machinery")]
    async fn clear(&self) -> ClearBasketResponse {
        self.store.clear().await;
        ClearBasketResponse::NoContent
    }

    /// Build the WhatsApp order
    ///
    /// Returns the order text and the link that opens it in WhatsApp. The basket is kept.
    #[oai(path = "/machinery-basket/order", method = "get", tag = "ApiTags::Machinery")]
    async fn order(&self) -> OrderResponse {
        let basket = self.store.snapshot().await;
        let today = Local::now().date_naive();
        let message = match order_message(&basket, &self.store_name, today) {
            Ok(message) => message,
            Err(err) => {
                self.notifier.notify(Notice::error(err.notice_message()));
                let (_status, json) = err.into_error_response();
                return OrderResponse::BadRequest(json);
            }
        };

        match whatsapp_link(&self.whatsapp_number, &message) {
            Ok(url) => OrderResponse::Ok(Json(OrderMessageResponse {
                message,
                whatsapp_url: url.to_string(),
            })),
            Err(_) => {
                let (_status, json) = error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "machinery.invalid_whatsapp_link",
                );
                OrderResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddMachineResponse {
    #[oai(status = 201)]
    Created(Json<BasketLineResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BasketChangeResponse {
    #[oai(status = 200)]
    Ok(Json<BasketResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

impl BasketChangeResponse {
    fn not_found() -> Self {
        Self::NotFound(Json(ErrorResponse {
            name: "NotFound".to_string(),
            message: "machinery.item_not_found".to_string(),
        }))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearBasketResponse {
    #[oai(status = 204)]
    NoContent,
}

#[derive(poem_openapi::ApiResponse)]
pub enum OrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderMessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
