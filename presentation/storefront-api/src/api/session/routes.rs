use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::session::store::SessionStore;
use business::domain::session::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::session::use_cases::logout::LogoutUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::{LoginResponse, UserResponse};
use crate::api::tags::ApiTags;

pub struct SessionApi {
    login_use_case: Arc<dyn LoginUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
    session: Arc<SessionStore>,
}

impl SessionApi {
    pub fn new(
        login_use_case: Arc<dyn LoginUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            login_use_case,
            logout_use_case,
            session,
        }
    }
}

/// Sign-in through the Google OAuth provider
#[OpenApi]
impl SessionApi {
    /// OAuth callback
    ///
    /// Stores the user handed back by the provider. On the first sign-in of a session the
    /// guest cart is pushed to the server and replaced by the server's cart.
    #[oai(path = "/auth/callback", method = "get", tag = "ApiTags::Session")]
    async fn callback(
        &self,
        token: Query<Option<String>>,
        name: Query<Option<String>>,
        email: Query<Option<String>>,
        id: Query<Option<String>>,
    ) -> CallbackResponse {
        let params = LoginParams {
            token: token.0,
            name: name.0,
            email: email.0,
            id: id.0,
        };

        match self.login_use_case.execute(params).await {
            Ok(outcome) => CallbackResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CallbackResponse::BadRequest(json)
            }
        }
    }

    /// Current user
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Session")]
    async fn me(&self) -> MeResponse {
        match self.session.current_user().await {
            Some(user) => MeResponse::Ok(Json(user.into())),
            None => MeResponse::Unauthorized(Json(ErrorResponse {
                name: "Unauthorized".to_string(),
                message: "session.not_authenticated".to_string(),
            })),
        }
    }

    /// Sign out
    ///
    /// Forgets the user and empties the local cart.
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Session")]
    async fn logout(&self) -> LogoutResponse {
        match self.logout_use_case.execute().await {
            Ok(()) => LogoutResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                LogoutResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CallbackResponse {
    #[oai(status = 200)]
    Ok(Json<LoginResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MeResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
