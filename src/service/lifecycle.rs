use sea_orm::DatabaseConnection;

use crate::{
    data::application::ApplicationRepository,
    error::{application::ApplicationError, AppError},
    model::application::{Application, ApplicationStatus, Category},
    service::notification::{NotificationDispatcher, NotificationJob},
};

/// Moves applications out of `AFVENTER` and queues the Discord notice.
pub struct LifecycleService<'a> {
    db: &'a DatabaseConnection,
    dispatcher: &'a NotificationDispatcher,
}

impl<'a> LifecycleService<'a> {
    pub fn new(db: &'a DatabaseConnection, dispatcher: &'a NotificationDispatcher) -> Self {
        Self { db, dispatcher }
    }

    /// Decides a pending application.
    ///
    /// The only legal transition is `AFVENTER` to a terminal status; decided
    /// applications stay decided and a fresh submission is the way back in.
    /// Exactly one notification job is queued once the new status is
    /// persisted, whether the decision approves or rejects.
    ///
    /// # Arguments
    /// - `category` - Category from the request path, scoping the id
    /// - `id` - Application id
    /// - `target` - The terminal status to move to
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application
    /// - `Err(AppError::ApplicationErr(NotTerminal))` - Target is `AFVENTER`
    /// - `Err(AppError::NotFound)` - No such id in this category
    /// - `Err(AppError::ApplicationErr(AlreadyDecided))` - Application left
    ///   `AFVENTER` earlier
    /// - `Err(AppError)` - Database error
    pub async fn decide(
        &self,
        category: Category,
        id: i32,
        target: ApplicationStatus,
    ) -> Result<Application, AppError> {
        if !target.is_terminal() {
            return Err(ApplicationError::NotTerminal(target).into());
        }

        let repo = ApplicationRepository::new(self.db);

        let current = repo.find_by_id(category, id).await?.ok_or_else(|| {
            AppError::NotFound(format!("No {} application with id {}", category, id))
        })?;

        if current.status.is_terminal() {
            return Err(ApplicationError::AlreadyDecided {
                id,
                status: current.status,
            }
            .into());
        }

        let updated = repo.update_status(id, target).await?;

        tracing::info!("Application {} ({}) decided: {}", id, category, target);

        self.dispatcher.enqueue(NotificationJob {
            application_id: updated.id,
            category,
            status: target,
            discord_handle: updated.discord.clone(),
        });

        Ok(updated)
    }

    /// Hard-deletes an application and its narrative answers.
    ///
    /// Works in any status and is idempotent: deleting an id the category
    /// does not hold succeeds without touching anything.
    pub async fn remove(&self, category: Category, id: i32) -> Result<(), AppError> {
        ApplicationRepository::new(self.db).delete(category, id).await?;

        tracing::info!("Deleted {} application {}", category, id);

        Ok(())
    }
}
