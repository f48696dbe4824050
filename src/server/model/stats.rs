use chrono::{DateTime, Utc};

use crate::model::stats::{DailyPlayerCountDto, MonthlyStatsDto, ServerStatsDto};

#[derive(Clone, Debug, PartialEq)]
pub struct ServerStats {
    pub id: i32,
    pub peak_players: i32,
    pub max_players: i32,
    pub uptime: f64,
    pub total_players: i32,
    pub world_size: String,
    pub date: DateTime<Utc>,
}

impl ServerStats {
    pub fn from_entity(entity: entity::server_stats::Model) -> Self {
        Self {
            id: entity.id,
            peak_players: entity.peak_players,
            max_players: entity.max_players,
            uptime: entity.uptime,
            total_players: entity.total_players,
            world_size: entity.world_size,
            date: entity.date,
        }
    }

    pub fn into_dto(self) -> ServerStatsDto {
        ServerStatsDto {
            id: self.id,
            peak_players: self.peak_players,
            max_players: self.max_players,
            uptime: self.uptime,
            total_players: self.total_players,
            world_size: self.world_size,
            date: self.date,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DailyPlayerCount {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub count: i32,
    pub percentage: i32,
}

impl DailyPlayerCount {
    pub fn from_entity(entity: entity::daily_player_count::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            count: entity.count,
            percentage: entity.percentage,
        }
    }

    pub fn into_dto(self) -> DailyPlayerCountDto {
        DailyPlayerCountDto {
            id: self.id,
            date: self.date,
            count: self.count,
            percentage: self.percentage,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyStats {
    pub month: String,
    pub players: i32,
    pub new_players: i32,
}

impl MonthlyStats {
    pub fn into_dto(self) -> MonthlyStatsDto {
        MonthlyStatsDto {
            month: self.month,
            players: self.players,
            new_players: self.new_players,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateDailyCountParam {
    pub count: i32,
    pub percentage: i32,
    pub date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateServerStatsParam {
    pub peak_players: i32,
    pub max_players: i32,
    pub uptime: f64,
    pub total_players: i32,
    pub world_size: String,
    pub date: DateTime<Utc>,
}
