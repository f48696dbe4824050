use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerRuleDto {
    pub id: i32,
    pub order: i32,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerFeatureDto {
    pub id: i32,
    pub order: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub icon_background: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageDto {
    pub id: i32,
    pub order: i32,
    pub title: String,
    pub image_url: String,
}

/// Aggregate payload for `GET /api/content`: all static site content in a
/// single request.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerContentDto {
    pub server_rules: Vec<ServerRuleDto>,
    pub server_features: Vec<ServerFeatureDto>,
    pub gallery_images: Vec<GalleryImageDto>,
}
