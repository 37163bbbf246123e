//! Category gate factory for creating test gate entities.
//!
//! This module provides factory methods for creating category gate rows with
//! sensible defaults. Gates are keyed by category, so tests usually create at
//! most one per category.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test category gates with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category_gate::CategoryGateFactory;
///
/// let gate = CategoryGateFactory::new(&db, "police")
///     .is_open(false)
///     .build()
///     .await?;
/// ```
pub struct CategoryGateFactory<'a> {
    db: &'a DatabaseConnection,
    category: String,
    is_open: bool,
}

impl<'a> CategoryGateFactory<'a> {
    /// Creates a new CategoryGateFactory with default values.
    ///
    /// Defaults:
    /// - is_open: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category` - Category key the gate controls
    ///
    /// # Returns
    /// - `CategoryGateFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, category: impl Into<String>) -> Self {
        Self {
            db,
            category: category.into(),
            is_open: true,
        }
    }

    /// Sets whether the gate is open.
    ///
    /// # Arguments
    /// - `is_open` - Whether submissions are accepted for the category
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Builds and inserts the category gate entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category_gate::Model)` - Created category gate entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category_gate::Model, DbErr> {
        entity::category_gate::ActiveModel {
            category: ActiveValue::Set(self.category),
            is_open: ActiveValue::Set(self.is_open),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category gate with an explicit open state.
///
/// Shorthand for `CategoryGateFactory::new(db, category).is_open(is_open).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `category` - Category key the gate controls
/// - `is_open` - Whether submissions are accepted for the category
///
/// # Returns
/// - `Ok(entity::category_gate::Model)` - Created category gate entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let gate = create_gate(&db, "whitelist", true).await?;
/// ```
pub async fn create_gate(
    db: &DatabaseConnection,
    category: impl Into<String>,
    is_open: bool,
) -> Result<entity::category_gate::Model, DbErr> {
    CategoryGateFactory::new(db, category).is_open(is_open).build().await
}
