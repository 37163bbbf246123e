use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::{
    error::AppError,
    model::application::{Application, ApplicationStatus, Category, CreateApplicationParam},
};

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new application in `AFVENTER` with its narrative field rows
    ///
    /// # Arguments
    /// - `param`: Validated submission parameters
    ///
    /// # Returns
    /// - `Ok(Application)`: The created application with its fields
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, param: CreateApplicationParam) -> Result<Application, AppError> {
        let application = entity::application::ActiveModel {
            steam_id: ActiveValue::Set(param.steam_id.to_string()),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            name: ActiveValue::Set(param.name),
            age: ActiveValue::Set(param.age),
            discord: ActiveValue::Set(param.discord),
            status: ActiveValue::Set(ApplicationStatus::Afventer.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (field_key, value) in &param.fields {
            entity::application_field::ActiveModel {
                application_id: ActiveValue::Set(application.id),
                field_key: ActiveValue::Set(field_key.clone()),
                value: ActiveValue::Set(value.clone()),
            }
            .insert(self.db)
            .await?;
        }

        Application::from_entity(application, param.fields)
    }

    /// Finds an application by id within a category
    ///
    /// The lookup is category-scoped: an id that exists under a different
    /// category is treated as absent.
    ///
    /// # Returns
    /// - `Ok(Some(Application))`: Application with its fields
    /// - `Ok(None)`: No such application in this category
    /// - `Err(AppError)`: Database error
    pub async fn find_by_id(
        &self,
        category: Category,
        id: i32,
    ) -> Result<Option<Application>, AppError> {
        let entity = entity::prelude::Application::find()
            .filter(entity::application::Column::Id.eq(id))
            .filter(entity::application::Column::Category.eq(category.as_str()))
            .one(self.db)
            .await?;

        if let Some(entity) = entity {
            let fields = self.load_fields(entity.id).await?;
            Ok(Some(Application::from_entity(entity, fields)?))
        } else {
            Ok(None)
        }
    }

    /// Gets all applications in a category, newest first, with their fields
    ///
    /// # Returns
    /// - `Ok(Vec<Application>)`: Applications ordered by creation time descending
    /// - `Err(AppError)`: Database error
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Application>, AppError> {
        let entities = entity::prelude::Application::find()
            .filter(entity::application::Column::Category.eq(category.as_str()))
            .order_by_desc(entity::application::Column::CreatedAt)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|a| a.id).collect();
        let mut fields_by_application: HashMap<i32, HashMap<String, String>> = HashMap::new();

        if !ids.is_empty() {
            let rows = entity::prelude::ApplicationField::find()
                .filter(entity::application_field::Column::ApplicationId.is_in(ids))
                .all(self.db)
                .await?;

            for row in rows {
                fields_by_application
                    .entry(row.application_id)
                    .or_default()
                    .insert(row.field_key, row.value);
            }
        }

        entities
            .into_iter()
            .map(|entity| {
                let fields = fields_by_application.remove(&entity.id).unwrap_or_default();
                Application::from_entity(entity, fields)
            })
            .collect()
    }

    /// Gets a user's most recent application in a category
    ///
    /// # Returns
    /// - `Ok(Some(Application))`: The newest application with its fields
    /// - `Ok(None)`: The user has never applied in this category
    /// - `Err(AppError)`: Database error
    pub async fn latest_for_user(
        &self,
        steam_id: u64,
        category: Category,
    ) -> Result<Option<Application>, AppError> {
        let entity = entity::prelude::Application::find()
            .filter(entity::application::Column::SteamId.eq(steam_id.to_string()))
            .filter(entity::application::Column::Category.eq(category.as_str()))
            .order_by_desc(entity::application::Column::CreatedAt)
            .order_by_desc(entity::application::Column::Id)
            .one(self.db)
            .await?;

        if let Some(entity) = entity {
            let fields = self.load_fields(entity.id).await?;
            Ok(Some(Application::from_entity(entity, fields)?))
        } else {
            Ok(None)
        }
    }

    /// Checks whether the user has an application in the category with any of
    /// the given statuses
    ///
    /// Used by the eligibility gate and the whitelist flag derivation.
    ///
    /// # Returns
    /// - `Ok(bool)`: Whether at least one matching application exists
    /// - `Err(AppError)`: Database error
    pub async fn has_with_status(
        &self,
        steam_id: u64,
        category: Category,
        statuses: &[ApplicationStatus],
    ) -> Result<bool, AppError> {
        let status_values: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();

        let count = entity::prelude::Application::find()
            .filter(entity::application::Column::SteamId.eq(steam_id.to_string()))
            .filter(entity::application::Column::Category.eq(category.as_str()))
            .filter(entity::application::Column::Status.is_in(status_values))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a user's most recent application in a category with the given
    /// status
    ///
    /// Used by the designation grant to locate the approved whitelist
    /// application carrying the Discord username.
    ///
    /// # Returns
    /// - `Ok(Some(Application))`: The newest matching application
    /// - `Ok(None)`: No application with that status
    /// - `Err(AppError)`: Database error
    pub async fn latest_with_status(
        &self,
        steam_id: u64,
        category: Category,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, AppError> {
        let entity = entity::prelude::Application::find()
            .filter(entity::application::Column::SteamId.eq(steam_id.to_string()))
            .filter(entity::application::Column::Category.eq(category.as_str()))
            .filter(entity::application::Column::Status.eq(status.as_str()))
            .order_by_desc(entity::application::Column::CreatedAt)
            .order_by_desc(entity::application::Column::Id)
            .one(self.db)
            .await?;

        if let Some(entity) = entity {
            let fields = self.load_fields(entity.id).await?;
            Ok(Some(Application::from_entity(entity, fields)?))
        } else {
            Ok(None)
        }
    }

    /// Sets the status of an application by id
    ///
    /// # Returns
    /// - `Ok(Application)`: The updated application with its fields
    /// - `Err(AppError::DbErr(RecordNotFound))`: No application with that id
    /// - `Err(AppError)`: Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Application, AppError> {
        let entity = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Application {} not found",
                id
            )))?;

        let mut active_model: entity::application::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        let updated = active_model.update(self.db).await?;

        let fields = self.load_fields(updated.id).await?;
        Application::from_entity(updated, fields)
    }

    /// Hard-deletes an application and its field rows
    ///
    /// Deleting an id that does not exist in the category is a no-op.
    ///
    /// # Returns
    /// - `Ok(())`: Application removed (or was already absent)
    /// - `Err(AppError)`: Database error
    pub async fn delete(&self, category: Category, id: i32) -> Result<(), AppError> {
        let entity = entity::prelude::Application::find()
            .filter(entity::application::Column::Id.eq(id))
            .filter(entity::application::Column::Category.eq(category.as_str()))
            .one(self.db)
            .await?;

        let Some(entity) = entity else {
            return Ok(());
        };

        entity::prelude::ApplicationField::delete_many()
            .filter(entity::application_field::Column::ApplicationId.eq(entity.id))
            .exec(self.db)
            .await?;

        entity::prelude::Application::delete_by_id(entity.id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn load_fields(&self, application_id: i32) -> Result<HashMap<String, String>, AppError> {
        let fields = entity::prelude::ApplicationField::find()
            .filter(entity::application_field::Column::ApplicationId.eq(application_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| (row.field_key, row.value))
            .collect();

        Ok(fields)
    }
}
