use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::api::notifications::center::NotificationCenter;
use crate::api::notifications::dto::NoticeResponse;
use crate::api::tags::ApiTags;

pub struct NotificationApi {
    center: Arc<NotificationCenter>,
}

impl NotificationApi {
    pub fn new(center: Arc<NotificationCenter>) -> Self {
        Self { center }
    }
}

#[OpenApi]
impl NotificationApi {
    /// Collect pending notices
    ///
    /// Returns the toasts raised since the last call and forgets them.
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn drain(&self) -> Json<Vec<NoticeResponse>> {
        Json(self.center.drain().into_iter().map(Into::into).collect())
    }
}
