use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotDto {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}
