use crate::error::{config::ConfigError, AppError};
use crate::model::application::Category;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,

    /// Public base URL, used as the OpenID realm and redirect base.
    pub app_url: String,
    pub listen_addr: String,

    pub steam_api_key: String,

    /// SteamID64 that receives the admin role on first login, if set.
    pub bootstrap_admin: Option<u64>,

    pub discord: DiscordConfig,
}

/// Guild, role, and webhook settings for the Discord side.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub bot_token: String,
    pub guild_id: u64,

    pub whitelist_role_id: u64,
    pub rejected_role_id: u64,

    pub whitelist_webhook_url: String,
    pub police_webhook_url: String,
    pub ems_webhook_url: String,
}

impl DiscordConfig {
    /// The notification webhook for a category's channel.
    pub fn webhook_for(&self, category: Category) -> &str {
        match category {
            Category::Whitelist => &self.whitelist_webhook_url,
            Category::Police => &self.police_webhook_url,
            Category::Ems => &self.ems_webhook_url,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            app_url: require("APP_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            steam_api_key: require("STEAM_API_KEY")?,
            bootstrap_admin: optional_u64("ADMIN_STEAM_ID")?,
            discord: DiscordConfig {
                bot_token: require("DISCORD_BOT_TOKEN")?,
                guild_id: require_u64("DISCORD_GUILD_ID")?,
                whitelist_role_id: require_u64("WHITELIST_ROLE_ID")?,
                rejected_role_id: require_u64("REJECTED_ROLE_ID")?,
                whitelist_webhook_url: require("WHITELIST_WEBHOOK_URL")?,
                police_webhook_url: require("POLICE_WEBHOOK_URL")?,
                ems_webhook_url: require("EMS_WEBHOOK_URL")?,
            },
        })
    }
}

fn require(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}

fn require_u64(name: &str) -> Result<u64, AppError> {
    require(name)?
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvVar(name.to_string()).into())
}

fn optional_u64(name: &str) -> Result<Option<u64>, AppError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string()).into()),
        Err(_) => Ok(None),
    }
}
