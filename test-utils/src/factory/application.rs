//! Application factory for creating test application entities.
//!
//! This module provides factory methods for creating application entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications with customizable fields.
///
/// Provides a builder pattern for creating application entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::application::ApplicationFactory;
///
/// let application = ApplicationFactory::new(&db, 76561198000000001)
///     .category("police")
///     .status("GODKENDT")
///     .discord("anna_rp")
///     .build()
///     .await?;
/// ```
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    steam_id: String,
    category: String,
    name: String,
    age: i32,
    discord: String,
    status: String,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - category: `"whitelist"`
    /// - name: `"Applicant {id}"` where id is auto-incremented
    /// - age: 21
    /// - discord: `"applicant_{id}"`
    /// - status: `"AFVENTER"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `steam_id` - SteamID64 of the applicant
    ///
    /// # Returns
    /// - `ApplicationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, steam_id: u64) -> Self {
        let id = next_id();
        Self {
            db,
            steam_id: steam_id.to_string(),
            category: "whitelist".to_string(),
            name: format!("Applicant {}", id),
            age: 21,
            discord: format!("applicant_{}", id),
            status: "AFVENTER".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the category key.
    ///
    /// # Arguments
    /// - `category` - Category key (`whitelist`, `police`, or `ems`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the applicant's name.
    ///
    /// # Arguments
    /// - `name` - Real-world name as entered on the form
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the applicant's age.
    ///
    /// # Arguments
    /// - `age` - Age as entered on the form
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the applicant's Discord username.
    ///
    /// # Arguments
    /// - `discord` - Discord username as entered on the form
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn discord(mut self, discord: impl Into<String>) -> Self {
        self.discord = discord.into();
        self
    }

    /// Sets the stored status.
    ///
    /// # Arguments
    /// - `status` - Status key (`AFVENTER`, `GODKENDT`, or `AFVIST`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the creation timestamp.
    ///
    /// Useful for tests that depend on submission ordering.
    ///
    /// # Arguments
    /// - `created_at` - Submission timestamp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the application entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::application::Model)` - Created application entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            id: ActiveValue::NotSet,
            steam_id: ActiveValue::Set(self.steam_id),
            category: ActiveValue::Set(self.category),
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            discord: ActiveValue::Set(self.discord),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending whitelist application with default values.
///
/// Shorthand for `ApplicationFactory::new(db, steam_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `steam_id` - SteamID64 of the applicant
///
/// # Returns
/// - `Ok(entity::application::Model)` - Created application entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let application = create_application(&db, 76561198000000001).await?;
/// ```
pub async fn create_application(
    db: &DatabaseConnection,
    steam_id: u64,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, steam_id).build().await
}

/// Creates an application in a specific category and status.
///
/// Shorthand for the builder chain setting both category and status.
///
/// # Arguments
/// - `db` - Database connection
/// - `steam_id` - SteamID64 of the applicant
/// - `category` - Category key (`whitelist`, `police`, or `ems`)
/// - `status` - Status key (`AFVENTER`, `GODKENDT`, or `AFVIST`)
///
/// # Returns
/// - `Ok(entity::application::Model)` - Created application entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let approved = create_application_with_status(&db, steam_id, "whitelist", "GODKENDT").await?;
/// ```
pub async fn create_application_with_status(
    db: &DatabaseConnection,
    steam_id: u64,
    category: impl Into<String>,
    status: impl Into<String>,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, steam_id)
        .category(category)
        .status(status)
        .build()
        .await
}
