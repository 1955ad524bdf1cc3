use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub date_joined: DateTime<Utc>,
}
