//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned cheaply for
//! each request through axum's state extraction. All fields are either
//! connection pools, reference-counted handles, or small owned values.

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    config::{Config, DiscordConfig},
    service::notification::NotificationDispatcher,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Steam calls (OpenID verification, player summaries).
    ///
    /// Configured with redirects disabled; the only redirect in the login
    /// flow is the one we issue ourselves.
    pub http_client: reqwest::Client,

    /// Discord HTTP client shared by role grants and the delivery worker.
    pub discord_http: Arc<Http>,

    /// Sending half of the notification queue.
    pub dispatcher: NotificationDispatcher,

    /// Guild, role, and webhook configuration for the Discord side.
    pub discord: DiscordConfig,

    /// Steam Web API key for profile lookups.
    pub steam_api_key: String,

    /// Public base URL for OpenID return targets and post-login redirects.
    pub app_url: String,

    /// Steam id granted `ADMIN` on first login, if configured.
    pub bootstrap_admin: Option<u64>,
}

impl AppState {
    /// Creates the application state from startup-initialized dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for Steam API requests
    /// - `discord_http` - Discord HTTP client for bot operations
    /// - `dispatcher` - Handle to the running notification worker
    /// - `config` - Parsed environment configuration, consumed for its
    ///   request-time settings
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        discord_http: Arc<Http>,
        dispatcher: NotificationDispatcher,
        config: Config,
    ) -> Self {
        Self {
            db,
            http_client,
            discord_http,
            dispatcher,
            discord: config.discord,
            steam_api_key: config.steam_api_key,
            app_url: config.app_url,
            bootstrap_admin: config.bootstrap_admin,
        }
    }
}
