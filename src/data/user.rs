//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the
//! database. It handles the login upsert, queries, and role management with
//! conversion between entity models and domain models at the infrastructure
//! boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::user::{Role, UpsertUserParam, User},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model during login.
    ///
    /// Inserts a new user with `role_on_create`, or refreshes an existing
    /// user's name, avatar, and last-login timestamp. The role column is not
    /// in the conflict update list, so a login never changes an existing
    /// user's role.
    ///
    /// # Arguments
    /// - `param` - Upsert parameters including steam_id, profile fields, and
    ///   the role to use if the user does not exist yet
    ///
    /// # Returns
    /// - `Ok(User)` - The created or refreshed user
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            steam_id: ActiveValue::Set(param.steam_id.to_string()),
            name: ActiveValue::Set(param.name),
            avatar: ActiveValue::Set(param.avatar),
            role: ActiveValue::Set(param.role_on_create.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::SteamId)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::Avatar,
                    entity::user::Column::LastLoginAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their SteamID64.
    ///
    /// # Arguments
    /// - `steam_id` - SteamID64 as u64
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that steam id
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_steam_id(&self, steam_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(steam_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets all users, newest registration first.
    ///
    /// Used by the admin user management view.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by creation time descending
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during startup to warn the operator when nobody can reach the
    /// admin surface yet.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(AppError)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Sets the role for a user.
    ///
    /// # Arguments
    /// - `steam_id` - SteamID64 of the user as u64
    /// - `role` - The role to assign
    ///
    /// # Returns
    /// - `Ok(())` - Role updated successfully (or no matching user found)
    /// - `Err(AppError)` - Database error during update operation
    pub async fn set_role(&self, steam_id: u64, role: Role) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::SteamId.eq(steam_id.to_string()))
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
