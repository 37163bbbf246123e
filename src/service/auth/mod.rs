//! Steam OpenID 2.0 login.
//!
//! Steam still speaks OpenID 2.0: the login redirect sends the user to the
//! Steam community endpoint, and the return is verified by replaying the
//! signed parameters back with mode `check_authentication`. No token is ever
//! issued; the only trusted output is the SteamID64 embedded in the claimed
//! id, which is then enriched with the player summary from the Web API.

use sea_orm::DatabaseConnection;

pub mod callback;
pub mod login;

pub const STEAM_OPENID_URL: &str = "https://steamcommunity.com/openid/login";
pub const STEAM_PLAYER_SUMMARY_URL: &str =
    "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2/";

pub struct SteamAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    /// Steam Web API key for the player summary lookup.
    pub api_key: &'a str,
    /// Public base URL, used as the OpenID realm and return target.
    pub app_url: &'a str,
    /// Steam id that receives the `ADMIN` role on first login, if configured.
    pub bootstrap_admin: Option<u64>,
}

impl<'a> SteamAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        api_key: &'a str,
        app_url: &'a str,
        bootstrap_admin: Option<u64>,
    ) -> Self {
        Self {
            db,
            http_client,
            api_key,
            app_url,
            bootstrap_admin,
        }
    }
}
