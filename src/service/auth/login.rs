use url::Url;

use crate::{
    error::AppError,
    service::auth::{SteamAuthService, STEAM_OPENID_URL},
};

impl<'a> SteamAuthService<'a> {
    /// Builds the Steam OpenID checkid_setup redirect URL.
    ///
    /// Steam shows its own login page and sends the user back to
    /// `/api/auth/return` with a signed assertion.
    pub fn login_url(&self) -> Result<Url, AppError> {
        let return_to = format!("{}/api/auth/return", self.app_url);

        let url = Url::parse_with_params(
            STEAM_OPENID_URL,
            &[
                ("openid.ns", "http://specs.openid.net/auth/2.0"),
                ("openid.mode", "checkid_setup"),
                ("openid.return_to", return_to.as_str()),
                ("openid.realm", self.app_url),
                (
                    "openid.identity",
                    "http://specs.openid.net/auth/2.0/identifier_select",
                ),
                (
                    "openid.claimed_id",
                    "http://specs.openid.net/auth/2.0/identifier_select",
                ),
            ],
        )
        .map_err(|e| AppError::InternalError(format!("Failed to build Steam login URL: {}", e)))?;

        Ok(url)
    }
}
