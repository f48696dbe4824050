use crate::model::status::ServerStatusDto;

/// Result of a single probe against the Minecraft status API.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerStatus {
    pub is_online: bool,
    pub player_count: i32,
    pub max_players: i32,
    pub version: String,
}

impl ServerStatus {
    /// Placeholder status used whenever the server is unreachable or the
    /// probe fails. Status lookups never surface probe errors to callers.
    pub fn offline(default_max_players: i32) -> Self {
        Self {
            is_online: false,
            player_count: 0,
            max_players: default_max_players,
            version: "Offline".to_string(),
        }
    }
}

/// A probe result enriched with today's recorded peak.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusSummary {
    pub is_online: bool,
    pub player_count: i32,
    pub max_players: i32,
    pub peak_today: i32,
    pub version: String,
}

impl StatusSummary {
    pub fn into_dto(self) -> ServerStatusDto {
        ServerStatusDto {
            is_online: self.is_online,
            player_count: self.player_count,
            max_players: self.max_players,
            peak_today: self.peak_today,
            version: self.version,
        }
    }
}
