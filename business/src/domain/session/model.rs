use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::UserId;

/// The customer signed in through the OAuth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Option<UserId>,
    pub name: Option<String>,
    pub email: String,
    pub token: String,
}

/// Shape written to local storage under the auth key.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default)]
    pub user: Option<AuthenticatedUser>,
}
