use serde::Deserialize;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, UpsertUserParam, User},
    service::auth::{SteamAuthService, STEAM_OPENID_URL, STEAM_PLAYER_SUMMARY_URL},
};

const STEAM_CLAIMED_ID_PREFIX: &str = "https://steamcommunity.com/openid/id/";

/// The OpenID assertion Steam appends to the return redirect.
///
/// Field names follow the OpenID 2.0 wire format, hence the dotted renames.
#[derive(Debug, Clone, Deserialize)]
pub struct SteamReturnParams {
    #[serde(rename = "openid.ns")]
    pub ns: String,
    #[serde(rename = "openid.mode")]
    pub mode: String,
    #[serde(rename = "openid.op_endpoint")]
    pub op_endpoint: String,
    #[serde(rename = "openid.claimed_id")]
    pub claimed_id: String,
    #[serde(rename = "openid.identity")]
    pub identity: Option<String>,
    #[serde(rename = "openid.return_to")]
    pub return_to: String,
    #[serde(rename = "openid.response_nonce")]
    pub response_nonce: String,
    #[serde(rename = "openid.assoc_handle")]
    pub assoc_handle: String,
    #[serde(rename = "openid.signed")]
    pub signed: String,
    #[serde(rename = "openid.sig")]
    pub sig: String,
}

#[derive(Debug, Deserialize)]
struct PlayerSummariesEnvelope {
    response: PlayerSummariesResponse,
}

#[derive(Debug, Deserialize)]
struct PlayerSummariesResponse {
    players: Vec<PlayerSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSummary {
    #[serde(rename = "personaname")]
    pub persona_name: String,
    #[serde(rename = "avatarfull")]
    pub avatar_full: String,
}

impl<'a> SteamAuthService<'a> {
    /// Completes the login: verifies the assertion, fetches the profile, and
    /// upserts the user record.
    ///
    /// # Arguments
    /// - `params` - The OpenID parameters from the return redirect
    ///
    /// # Returns
    /// - `Ok(User)` - The created or refreshed user
    /// - `Err(AppError::AuthErr)` - The assertion was malformed or rejected
    /// - `Err(AppError)` - Steam or database calls failed
    pub async fn callback(&self, params: &SteamReturnParams) -> Result<User, AppError> {
        let steam_id = self.verify_assertion(params).await?;
        let summary = self.fetch_player_summary(steam_id).await?;

        let role_on_create = if self.bootstrap_admin == Some(steam_id) {
            Role::Admin
        } else {
            Role::Normal
        };

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                steam_id,
                name: summary.persona_name,
                avatar: summary.avatar_full,
                role_on_create,
            })
            .await?;

        Ok(user)
    }

    /// Verifies the signed assertion by replaying it to Steam with mode
    /// `check_authentication`.
    ///
    /// # Returns
    /// - `Ok(u64)` - The verified SteamID64 from the claimed id
    /// - `Err(AppError::AuthErr(MalformedAssertion))` - Unexpected mode or
    ///   claimed id outside Steam's namespace
    /// - `Err(AppError::AuthErr(AssertionRejected))` - Steam did not confirm
    ///   the signature
    pub async fn verify_assertion(&self, params: &SteamReturnParams) -> Result<u64, AppError> {
        if params.mode != "id_res" {
            return Err(
                AuthError::MalformedAssertion(format!("unexpected mode '{}'", params.mode)).into(),
            );
        }

        let mut form: Vec<(&str, &str)> = vec![
            ("openid.ns", params.ns.as_str()),
            ("openid.mode", "check_authentication"),
            ("openid.op_endpoint", params.op_endpoint.as_str()),
            ("openid.claimed_id", params.claimed_id.as_str()),
            ("openid.return_to", params.return_to.as_str()),
            ("openid.response_nonce", params.response_nonce.as_str()),
            ("openid.assoc_handle", params.assoc_handle.as_str()),
            ("openid.signed", params.signed.as_str()),
            ("openid.sig", params.sig.as_str()),
        ];
        if let Some(identity) = &params.identity {
            form.push(("openid.identity", identity.as_str()));
        }

        let body = self
            .http_client
            .post(STEAM_OPENID_URL)
            .form(&form)
            .send()
            .await?
            .text()
            .await?;

        let is_valid = body
            .lines()
            .any(|line| line.trim() == "is_valid:true");

        if !is_valid {
            return Err(AuthError::AssertionRejected.into());
        }

        let steam_id_str = params
            .claimed_id
            .strip_prefix(STEAM_CLAIMED_ID_PREFIX)
            .ok_or_else(|| {
                AuthError::MalformedAssertion(format!(
                    "claimed id '{}' outside Steam namespace",
                    params.claimed_id
                ))
            })?;

        let steam_id = steam_id_str.parse::<u64>().map_err(|_| {
            AuthError::MalformedAssertion(format!("claimed id '{}' is not a SteamID64", steam_id_str))
        })?;

        Ok(steam_id)
    }

    /// Retrieves the player's persona name and avatar from the Steam Web API.
    async fn fetch_player_summary(&self, steam_id: u64) -> Result<PlayerSummary, AppError> {
        let envelope = self
            .http_client
            .get(STEAM_PLAYER_SUMMARY_URL)
            .query(&[
                ("key", self.api_key),
                ("steamids", steam_id.to_string().as_str()),
            ])
            .send()
            .await?
            .json::<PlayerSummariesEnvelope>()
            .await?;

        envelope
            .response
            .players
            .into_iter()
            .next()
            .ok_or_else(|| AuthError::ProfileNotFound(steam_id).into())
    }
}
