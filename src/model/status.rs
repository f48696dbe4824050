use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Live server status combined with today's peak, as served by
/// `GET /api/server-status`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatusDto {
    pub is_online: bool,
    pub player_count: i32,
    pub max_players: i32,
    pub peak_today: i32,
    pub version: String,
}
