use std::sync::Arc;

use crate::domain::cart::backend::CartBackend;
use crate::domain::cart::store::CartStore;
use crate::domain::errors::BackendError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

/// What to do with the local cart when the server reports an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyServerCart {
    /// The server is authoritative: an empty server cart empties the local one.
    Replace,
    /// Keep the local lines (used right after sign-in).
    KeepLocal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResyncOutcome {
    pub pulled: usize,
    pub replaced: bool,
}

/// Pulls the server cart and replaces the local one with it.
///
/// Running it twice against the same server state leaves the same local cart.
pub struct CartResync {
    pub backend: Arc<dyn CartBackend>,
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

impl CartResync {
    pub async fn pull(
        &self,
        user_id: &UserId,
        on_empty: EmptyServerCart,
    ) -> Result<ResyncOutcome, BackendError> {
        let server_lines = self.backend.fetch_items(user_id).await?;
        let pulled = server_lines.len();

        if server_lines.is_empty() && on_empty == EmptyServerCart::KeepLocal {
            self.logger
                .debug(&format!("Server cart for {} is empty, keeping local cart", user_id));
            return Ok(ResyncOutcome {
                pulled,
                replaced: false,
            });
        }

        self.store
            .mutate(|cart| cart.rebuild_from(&server_lines))
            .await;
        self.logger.info(&format!(
            "Local cart replaced with {} server line(s) for {}",
            pulled, user_id
        ));
        Ok(ResyncOutcome {
            pulled,
            replaced: true,
        })
    }
}
