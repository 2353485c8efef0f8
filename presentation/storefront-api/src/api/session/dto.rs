use poem_openapi::Object;

use business::domain::session::model::AuthenticatedUser;
use business::domain::session::use_cases::login::LoginOutcome;

use crate::api::cart::dto::ReconcileResponse;

/// The signed-in user. The OAuth token never leaves the server.
#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    pub email: String,
}

impl From<AuthenticatedUser> for UserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id.map(|id| id.to_string()),
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct LoginResponse {
    pub user: UserResponse,
    /// Present when the guest cart was handed to the server during this sign-in
    #[oai(skip_serializing_if_is_none)]
    pub reconciled: Option<ReconcileResponse>,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            user: outcome.user.into(),
            reconciled: outcome.reconciled.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::UserId;
    use poem_openapi::types::ToJSON;

    #[test]
    fn should_leave_token_out_of_user_response() {
        let user = AuthenticatedUser {
            id: Some(UserId::new("U1")),
            name: Some("Asha".to_string()),
            email: "asha@example.com".to_string(),
            token: "secret-token".to_string(),
        };

        let response = UserResponse::from(user);
        let json = response.to_json_string();

        assert_eq!(response.id.as_deref(), Some("U1"));
        assert!(!json.contains("secret-token"));
    }
}
