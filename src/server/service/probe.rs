use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::server::{config::Config, error::AppError, model::status::ServerStatus};

/// Source of live Minecraft server status. The production implementation
/// queries an external status aggregator; tests substitute a stub.
#[async_trait]
pub trait StatusProber: Send + Sync {
    /// Probes the server. Infallible by design: any failure is reported as
    /// an offline status rather than an error.
    async fn probe(&self) -> ServerStatus;
}

/// Prober backed by the mcstatus.io HTTP API.
pub struct McStatusProber {
    client: reqwest::Client,
    url: String,
    default_max_players: i32,
}

impl McStatusProber {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.probe_timeout_secs))
            .build()?;

        let url = format!(
            "{}/{}:{}",
            config.status_api_url.trim_end_matches('/'),
            config.minecraft_host,
            config.minecraft_port
        );

        Ok(Self {
            client,
            url,
            default_max_players: config.default_max_players,
        })
    }

    async fn fetch(&self) -> Result<McStatusResponse, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl StatusProber for McStatusProber {
    async fn probe(&self) -> ServerStatus {
        match self.fetch().await {
            Ok(response) if response.online => ServerStatus {
                is_online: true,
                player_count: response.players.online.max(0),
                max_players: response.players.max.max(0),
                version: response
                    .version
                    .and_then(|version| version.name_clean)
                    .unwrap_or_else(|| "Unknown".to_string()),
            },
            Ok(_) => ServerStatus::offline(self.default_max_players),
            Err(err) => {
                tracing::warn!("Failed to fetch Minecraft server status: {}", err);

                ServerStatus::offline(self.default_max_players)
            }
        }
    }
}

#[derive(Deserialize)]
struct McStatusResponse {
    #[serde(default)]
    online: bool,
    #[serde(default)]
    players: McStatusPlayers,
    version: Option<McStatusVersion>,
}

#[derive(Default, Deserialize)]
struct McStatusPlayers {
    #[serde(default)]
    online: i32,
    #[serde(default)]
    max: i32,
}

#[derive(Deserialize)]
struct McStatusVersion {
    name_clean: Option<String>,
}
