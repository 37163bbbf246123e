//! Factory for creating application field test data.
//!
//! Provides factory methods for creating narrative answer rows with sensible defaults.
//! Field rows must reference an existing application due to foreign key constraints.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for building application field entities with custom values.
///
/// Allows customization of the answer value before creation. Use `create_field()`
/// for quick creation with an explicit key and value.
pub struct ApplicationFieldFactory<'a> {
    db: &'a DatabaseConnection,
    application_id: i32,
    field_key: String,
    value: String,
}

impl<'a> ApplicationFieldFactory<'a> {
    /// Creates a new factory instance with default values.
    ///
    /// Defaults:
    /// - field_key: `"field_{id}"` where id is auto-incremented
    /// - value: `"Answer {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `application_id` - ID of the application this answer belongs to
    pub fn new(db: &'a DatabaseConnection, application_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            application_id,
            field_key: format!("field_{}", id),
            value: format!("Answer {}", id),
        }
    }

    /// Sets the field key.
    ///
    /// # Arguments
    /// - `field_key` - Category schema key for the answer
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn field_key(mut self, field_key: impl Into<String>) -> Self {
        self.field_key = field_key.into();
        self
    }

    /// Sets the answer value.
    ///
    /// # Arguments
    /// - `value` - Narrative answer text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Builds and inserts the application field entity.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created application field entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::application_field::Model, DbErr> {
        entity::application_field::ActiveModel {
            application_id: ActiveValue::Set(self.application_id),
            field_key: ActiveValue::Set(self.field_key),
            value: ActiveValue::Set(self.value),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an application field row with an explicit key and value.
///
/// # Arguments
/// - `db` - Database connection for inserting the entity
/// - `application_id` - ID of the application this answer belongs to
/// - `field_key` - Category schema key for the answer
/// - `value` - Narrative answer text
///
/// # Returns
/// - `Ok(Model)` - The created application field entity
/// - `Err(DbErr)` - Database error during insertion
///
/// # Example
/// ```rust,ignore
/// let field = factory::application_field::create_field(
///     &db,
///     application.id,
///     "police_motivation",
///     "I want to keep the city safe",
/// ).await?;
/// ```
pub async fn create_field(
    db: &DatabaseConnection,
    application_id: i32,
    field_key: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::application_field::Model, DbErr> {
    ApplicationFieldFactory::new(db, application_id)
        .field_key(field_key)
        .value(value)
        .build()
        .await
}

/// Creates multiple field rows for a single application.
///
/// Convenience function for populating a full answer set in one call.
///
/// # Arguments
/// - `db` - Database connection for inserting the entities
/// - `application_id` - ID of the application the answers belong to
/// - `fields` - Slice of `(key, value)` pairs to insert
///
/// # Returns
/// - `Ok(Vec<Model>)` - Vector of created application field entities
/// - `Err(DbErr)` - Database error during insertion
///
/// # Example
/// ```rust,ignore
/// let fields = factory::application_field::create_fields(
///     &db,
///     application.id,
///     &[("police_motivation", "Serve"), ("good_police_qualities", "Patience")],
/// ).await?;
/// ```
pub async fn create_fields(
    db: &DatabaseConnection,
    application_id: i32,
    fields: &[(&str, &str)],
) -> Result<Vec<entity::application_field::Model>, DbErr> {
    let mut results = Vec::new();
    for (field_key, value) in fields {
        let field = create_field(db, application_id, *field_key, *value).await?;
        results.push(field);
    }
    Ok(results)
}
