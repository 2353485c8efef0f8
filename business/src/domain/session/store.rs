use std::sync::Arc;

use tokio::sync::RwLock;

use super::model::{AuthenticatedUser, PersistedSession};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;
use crate::domain::storage::{AUTH_STORAGE_KEY, LocalStorage, PersistedSlot, USER_ID_STORAGE_KEY};

/// Who is signed in, persisted across reloads.
///
/// The user id is also kept under its own key, which is what the cart and order flows read.
pub struct SessionStore {
    user: RwLock<Option<AuthenticatedUser>>,
    user_id: RwLock<Option<UserId>>,
    session_slot: PersistedSlot,
    user_id_slot: PersistedSlot,
}

impl SessionStore {
    pub async fn load(storage: Arc<dyn LocalStorage>, logger: Arc<dyn Logger>) -> Self {
        let session_slot = PersistedSlot::new(storage.clone(), AUTH_STORAGE_KEY, logger.clone());
        let user_id_slot = PersistedSlot::new(storage, USER_ID_STORAGE_KEY, logger);
        let user = session_slot
            .load::<PersistedSession>()
            .await
            .and_then(|s| s.user);
        let user_id = user_id_slot
            .load_raw()
            .await
            .filter(|id| !id.trim().is_empty())
            .map(UserId::new);
        Self {
            user: RwLock::new(user),
            user_id: RwLock::new(user_id),
            session_slot,
            user_id_slot,
        }
    }

    pub async fn current_user(&self) -> Option<AuthenticatedUser> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// The persisted user id, when one was handed over at sign-in.
    pub async fn user_id(&self) -> Option<UserId> {
        self.user_id.read().await.clone()
    }

    pub async fn sign_in(&self, user: AuthenticatedUser) {
        if let Some(id) = &user.id {
            let mut user_id = self.user_id.write().await;
            *user_id = Some(id.clone());
            self.user_id_slot.save_raw(id.as_str()).await;
        }
        let mut current = self.user.write().await;
        *current = Some(user.clone());
        self.session_slot
            .save(&PersistedSession { user: Some(user) })
            .await;
    }

    pub async fn sign_out(&self) {
        *self.user.write().await = None;
        *self.user_id.write().await = None;
        self.session_slot.clear().await;
        self.user_id_slot.clear().await;
    }
}
