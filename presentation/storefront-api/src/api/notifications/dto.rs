use poem_openapi::Object;

use business::domain::notifier::Notice;

#[derive(Debug, Clone, Object)]
pub struct NoticeResponse {
    /// success, error, info or warning
    pub level: String,
    pub message: String,
}

impl From<Notice> for NoticeResponse {
    fn from(notice: Notice) -> Self {
        Self {
            level: notice.level.to_string(),
            message: notice.message,
        }
    }
}
