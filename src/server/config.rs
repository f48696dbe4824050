use std::path::PathBuf;

use crate::server::error::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_APP_URL: &str = "http://localhost:3000";
const DEFAULT_STATUS_API_URL: &str = "https://api.mcstatus.io/v2/status/java";
const DEFAULT_MINECRAFT_PORT: u16 = 25565;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_PLAYERS: i32 = 20;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Runtime configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Public base URL of this service, used to build absolute upload links.
    pub app_url: String,
    pub minecraft_host: String,
    pub minecraft_port: u16,
    /// Base URL of the external Minecraft status aggregator.
    pub status_api_url: String,
    pub probe_timeout_secs: u64,
    /// Slot count reported while the server is unreachable.
    pub default_max_players: i32,
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            bind_address: optional_env("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            app_url: optional_env("APP_URL", DEFAULT_APP_URL),
            minecraft_host: require_env("MINECRAFT_HOST")?,
            minecraft_port: parsed_env("MINECRAFT_PORT", DEFAULT_MINECRAFT_PORT)?,
            status_api_url: optional_env("STATUS_API_URL", DEFAULT_STATUS_API_URL),
            probe_timeout_secs: parsed_env("PROBE_TIMEOUT_SECS", DEFAULT_PROBE_TIMEOUT_SECS)?,
            default_max_players: parsed_env("DEFAULT_MAX_PLAYERS", DEFAULT_MAX_PLAYERS)?,
            upload_dir: PathBuf::from(optional_env("UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
        })
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name))
}

fn optional_env(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar { name, value }),
        Err(_) => Ok(default),
    }
}
