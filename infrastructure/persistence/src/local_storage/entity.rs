use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct LocalStorageEntity {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
