use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{error::AppError, model::application::Category, model::gate::CategoryGate};

pub struct CategoryGateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryGateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category gate record.
    pub async fn get_all(&self) -> Result<Vec<CategoryGate>, AppError> {
        let entities = entity::prelude::CategoryGate::find()
            .order_by_asc(entity::category_gate::Column::Category)
            .all(self.db)
            .await?;

        entities.into_iter().map(CategoryGate::from_entity).collect()
    }

    /// Sets the open flag for a category, creating the record if absent.
    pub async fn set_open(
        &self,
        category: Category,
        is_open: bool,
    ) -> Result<CategoryGate, AppError> {
        let entity = entity::prelude::CategoryGate::insert(entity::category_gate::ActiveModel {
            category: ActiveValue::Set(category.as_str().to_string()),
            is_open: ActiveValue::Set(is_open),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::category_gate::Column::Category)
                .update_columns([
                    entity::category_gate::Column::IsOpen,
                    entity::category_gate::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        CategoryGate::from_entity(entity)
    }

    /// Inserts an open gate for the category if none exists yet.
    ///
    /// Used at startup so clients always find one record per category.
    pub async fn ensure_exists(&self, category: Category) -> Result<(), AppError> {
        entity::prelude::CategoryGate::insert(entity::category_gate::ActiveModel {
            category: ActiveValue::Set(category.as_str().to_string()),
            is_open: ActiveValue::Set(true),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::category_gate::Column::Category)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
