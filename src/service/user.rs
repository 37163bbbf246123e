use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{Role, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every registered user, newest registration first.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_all().await
    }

    /// Sets a user's role and returns the updated record.
    ///
    /// # Arguments
    /// - `steam_id` - SteamID64 of the user
    /// - `role` - The role to assign
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new role
    /// - `Err(AppError::NotFound)` - No user with that steam id
    /// - `Err(AppError)` - Database error
    pub async fn set_role(&self, steam_id: u64, role: Role) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let mut user = repo
            .find_by_steam_id(steam_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user with steam id {}", steam_id)))?;

        repo.set_role(steam_id, role).await?;
        user.role = role;

        tracing::info!("User {} role set to {}", steam_id, role);

        Ok(user)
    }
}
