//! Type-safe session management wrapper.
//!
//! Wraps the tower-sessions `Session` behind a focused interface so session
//! keys live in one place and values keep a consistent type. Only
//! authentication state is stored in the session; everything else about the
//! current user is re-derived per request by the auth guard.

use tower_sessions::Session;

use crate::{error::AppError, util::parse::parse_u64_from_string};

// Session key constants
const SESSION_AUTH_STEAM_ID: &str = "auth:steam_id";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's SteamID64 and
/// session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's SteamID64 in the session.
    ///
    /// Called after a successful Steam login to establish a logged-in session.
    ///
    /// # Arguments
    /// - `steam_id` - The user's SteamID64
    ///
    /// # Returns
    /// - `Ok(())` - Steam id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_steam_id(&self, steam_id: u64) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_STEAM_ID, steam_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user's SteamID64 from the session.
    ///
    /// # Returns
    /// - `Ok(Some(steam_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_steam_id(&self) -> Result<Option<u64>, AppError> {
        let Some(steam_id_str) = self.session.get::<String>(SESSION_AUTH_STEAM_ID).await? else {
            return Ok(None);
        };

        let steam_id = parse_u64_from_string(steam_id_str)?;

        Ok(Some(steam_id))
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove the authentication state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
