use dioxus_logger::tracing::Level;
use serenity::all::GuildId;
use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_EVENT_CONFIG_PATH: &str = "config.json";
const DEFAULT_DATA_DIR: &str = "data";

/// Token value shipped in `.env.example`; treated as unset.
const PLACEHOLDER_TOKEN: &str = "YOUR_DISCORD_BOT_TOKEN";

pub struct Config {
    pub discord_token: String,

    /// Path of the event catalog document.
    pub event_config_path: PathBuf,
    /// Directory holding the snapshot documents and reset backups.
    pub data_dir: PathBuf,
    pub archive_on_reset: bool,

    /// Registers commands to this guild only when set, otherwise globally.
    pub discord_guild_id: Option<GuildId>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Blank values count as unset, so optional variables fall back to their
    /// defaults and required ones report `MissingEnvVar`.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of an environment variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing token or an unparseable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let discord_token = var("DISCORD_TOKEN")
            .filter(|token| token != PLACEHOLDER_TOKEN)
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let archive_on_reset = match var("ARCHIVE_ON_RESET") {
            Some(value) => parse_bool("ARCHIVE_ON_RESET", &value)?,
            None => true,
        };

        let discord_guild_id = var("DISCORD_GUILD_ID")
            .map(|value| {
                value
                    .parse::<u64>()
                    .ok()
                    .filter(|id| *id != 0)
                    .map(GuildId::new)
                    .ok_or(ConfigError::InvalidEnvVar {
                        name: "DISCORD_GUILD_ID".to_string(),
                        value,
                    })
            })
            .transpose()?;

        let log_level = match var("LOG_LEVEL") {
            Some(value) => value.parse::<Level>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "LOG_LEVEL".to_string(),
                value,
            })?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_token,
            event_config_path: var("EVENT_CONFIG_PATH")
                .unwrap_or_else(|| DEFAULT_EVENT_CONFIG_PATH.to_string())
                .into(),
            data_dir: var("DATA_DIR")
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
                .into(),
            archive_on_reset,
            discord_guild_id,
            log_level,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
