use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatsDto {
    pub id: i32,
    pub peak_players: i32,
    pub max_players: i32,
    pub uptime: f64,
    pub total_players: i32,
    pub world_size: String,
    pub date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlayerCountDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub count: i32,
    pub percentage: i32,
}

/// One month of aggregated player activity for the growth chart.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatsDto {
    pub month: String,
    pub players: i32,
    pub new_players: i32,
}
