use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
}
