use sea_orm::DatabaseConnection;

use crate::{
    data::application::ApplicationRepository,
    error::{application::ApplicationError, AppError},
    model::{application::Category, user::CurrentUser},
};

/// Decides whether an applicant may submit to a category right now.
pub struct EligibilityGate<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EligibilityGate<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks the duplicate-submission rules for one actor and category.
    ///
    /// Whitelist submissions are blocked only by a pending application, so
    /// accepted players can apply again. Police and EMS submissions are
    /// blocked by a pending or approved application and are only open to
    /// whitelisted players.
    ///
    /// # Arguments
    /// - `actor` - The resolved current user submitting the application
    /// - `category` - The category being applied to
    ///
    /// # Returns
    /// - `Ok(())` - The actor may submit
    /// - `Err(AppError::ApplicationErr)` - Blocked, with the reason
    /// - `Err(AppError)` - Database error during the probe
    pub async fn can_submit(
        &self,
        actor: &CurrentUser,
        category: Category,
    ) -> Result<(), AppError> {
        if category.requires_whitelist() && !actor.whitelisted {
            return Err(ApplicationError::WhitelistRequired(category).into());
        }

        let blocked = ApplicationRepository::new(self.db)
            .has_with_status(actor.steam_id, category, category.blocking_statuses())
            .await?;

        if blocked {
            return Err(ApplicationError::AlreadyApplied(category).into());
        }

        Ok(())
    }
}
