//! Per-request identity resolution.
//!
//! `AuthGuard` turns a session into a `CurrentUser` on every request: the
//! stored user row plus the derived whitelist flag, so role changes and fresh
//! approvals apply without re-login. Resolution never fails a request; any
//! session or store error is logged and treated as anonymous.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::{application::ApplicationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        application::{ApplicationStatus, Category},
        user::CurrentUser,
    },
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the current user from the session, or anonymous.
    ///
    /// Returns `None` when no user id is in the session, when the referenced
    /// user row is gone, or when the session store or database errors; the
    /// error cases are logged at warn level rather than failing the request.
    pub async fn current_user(&self) -> Option<CurrentUser> {
        let steam_id = match AuthSession::new(self.session).get_steam_id().await {
            Ok(Some(steam_id)) => steam_id,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Session read failed, treating request as anonymous: {}", e);
                return None;
            }
        };

        let user = match UserRepository::new(self.db).find_by_steam_id(steam_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(
                    "Identity resolution failed for {}, treating request as anonymous: {}",
                    steam_id,
                    e
                );
                return None;
            }
        };

        let whitelisted = match ApplicationRepository::new(self.db)
            .has_with_status(steam_id, Category::Whitelist, &[ApplicationStatus::Godkendt])
            .await
        {
            Ok(whitelisted) => whitelisted,
            Err(e) => {
                tracing::warn!(
                    "Whitelist lookup failed for {}, treating request as anonymous: {}",
                    steam_id,
                    e
                );
                return None;
            }
        };

        Some(CurrentUser {
            steam_id: user.steam_id,
            name: user.name,
            avatar: user.avatar,
            role: user.role,
            whitelisted,
        })
    }

    /// Resolves the current user or rejects the request with 401.
    pub async fn require(&self) -> Result<CurrentUser, AppError> {
        match self.current_user().await {
            Some(user) => Ok(user),
            None => Err(AuthError::NotAuthenticated.into()),
        }
    }

    /// Resolves the current user and requires the `ADMIN` role.
    ///
    /// # Arguments
    /// - `action` - Short description of the attempted operation for the
    ///   denial log
    pub async fn require_admin(&self, action: &str) -> Result<CurrentUser, AppError> {
        let user = self.require().await?;

        if !user.is_admin() {
            return Err(AuthError::AccessDenied(user.steam_id, action.to_string()).into());
        }

        Ok(user)
    }
}
