//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .steam_id(76561198000000001)
///     .name("CustomUser")
///     .role("ADMIN")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    steam_id: String,
    name: String,
    avatar: String,
    role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - steam_id: `"7656119{id}"` zero-padded to a 17-digit SteamID64, auto-incremented
    /// - name: `"User {id}"`
    /// - avatar: a unique placeholder avatar URL
    /// - role: `"NORMAL"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            steam_id: format!("7656119{:010}", id),
            name: format!("User {}", id),
            avatar: format!("https://avatars.example.com/{}_full.jpg", id),
            role: "NORMAL".to_string(),
        }
    }

    /// Sets the SteamID64 for the user.
    ///
    /// # Arguments
    /// - `steam_id` - SteamID64 of the user
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn steam_id(mut self, steam_id: u64) -> Self {
        self.steam_id = steam_id.to_string();
        self
    }

    /// Sets the name for the user.
    ///
    /// # Arguments
    /// - `name` - Steam persona name for the user
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the avatar URL for the user.
    ///
    /// # Arguments
    /// - `avatar` - Avatar image URL
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Sets the stored role for the user.
    ///
    /// # Arguments
    /// - `role` - Role key (`NORMAL` or `ADMIN`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            steam_id: ActiveValue::Set(self.steam_id),
            name: ActiveValue::Set(self.name),
            avatar: ActiveValue::Set(self.avatar),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific SteamID64.
///
/// Shorthand for `UserFactory::new(db).steam_id(steam_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `steam_id` - SteamID64 for the user
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user_with_steam_id(&db, 76561198000000001).await?;
/// ```
pub async fn create_user_with_steam_id(
    db: &DatabaseConnection,
    steam_id: u64,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).steam_id(steam_id).build().await
}

/// Creates a user with the `ADMIN` role.
///
/// Shorthand for `UserFactory::new(db).role("ADMIN").build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created admin user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("ADMIN").build().await
}
