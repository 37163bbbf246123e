//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a pending whitelist application.
///
/// This is a convenience method that creates:
/// 1. User
/// 2. Application (category `whitelist`, status `AFVENTER`) owned by that user
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, application))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_application(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::application::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let steam_id = user
        .steam_id
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(e.to_string()))?;
    let application = crate::factory::application::create_application(db, steam_id).await?;

    Ok((user, application))
}

/// Creates an application owned by an existing user.
///
/// Reads the owner's steam id off the user entity, so tests do not have to
/// re-parse the string column themselves. The application is created in the
/// given category with status `AFVENTER`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - User entity that owns the application
/// - `category` - Category key (`whitelist`, `police`, or `ems`)
///
/// # Returns
/// - `Ok(application)` - The created application entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_application_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    category: impl Into<String>,
) -> Result<entity::application::Model, DbErr> {
    let steam_id = user
        .steam_id
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(e.to_string()))?;

    crate::factory::application::ApplicationFactory::new(db, steam_id)
        .category(category)
        .build()
        .await
}
