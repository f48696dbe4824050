use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsPostDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a news post. Anonymous posts hide the author
/// name on the frontend but still store it when provided.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsPostDto {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}
