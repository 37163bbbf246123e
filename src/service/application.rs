use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::application::ApplicationRepository,
    error::{application::ApplicationError, AppError},
    model::{
        application::{Application, Category, CreateApplicationDto, CreateApplicationParam},
        user::CurrentUser,
    },
    service::eligibility::EligibilityGate,
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new application in `AFVENTER`.
    ///
    /// Runs the eligibility gate for the actor and category, validates the
    /// payload against the category's field schema, and persists the
    /// application with its narrative answers.
    ///
    /// # Arguments
    /// - `actor` - The resolved current user submitting the form
    /// - `category` - Category from the request path
    /// - `payload` - Submission body
    ///
    /// # Returns
    /// - `Ok(Application)` - The created application
    /// - `Err(AppError::ApplicationErr)` - Blocked by eligibility or the
    ///   payload fails schema validation
    /// - `Err(AppError)` - Database error
    pub async fn submit(
        &self,
        actor: &CurrentUser,
        category: Category,
        payload: CreateApplicationDto,
    ) -> Result<Application, AppError> {
        EligibilityGate::new(self.db)
            .can_submit(actor, category)
            .await?;

        validate_applicant_block(&payload)?;
        validate_fields(category, &payload.fields)?;

        let application = ApplicationRepository::new(self.db)
            .create(CreateApplicationParam {
                steam_id: actor.steam_id,
                category,
                name: payload.name,
                age: payload.age,
                discord: payload.discord,
                fields: payload.fields,
            })
            .await?;

        tracing::info!(
            "User {} submitted {} application {}",
            actor.steam_id,
            category,
            application.id
        );

        Ok(application)
    }

    /// Gets the actor's most recent application in the category.
    ///
    /// # Returns
    /// - `Ok(Application)` - The newest own application
    /// - `Err(AppError::NotFound)` - The actor has never applied here
    /// - `Err(AppError)` - Database error
    pub async fn latest_own(
        &self,
        actor: &CurrentUser,
        category: Category,
    ) -> Result<Application, AppError> {
        ApplicationRepository::new(self.db)
            .latest_for_user(actor.steam_id, category)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No {} application found", category)))
    }

    /// Lists every application in the category, newest first.
    pub async fn list(&self, category: Category) -> Result<Vec<Application>, AppError> {
        ApplicationRepository::new(self.db)
            .list_by_category(category)
            .await
    }
}

fn validate_applicant_block(payload: &CreateApplicationDto) -> Result<(), AppError> {
    if payload.name.trim().is_empty() || payload.discord.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Name and Discord username are required".to_string(),
        ));
    }

    if payload.age <= 0 {
        return Err(AppError::BadRequest(
            "Age must be a positive number".to_string(),
        ));
    }

    Ok(())
}

/// Checks the narrative answers against the category's field schema.
///
/// Every required key must be present with a non-blank value; keys outside
/// the schema are rejected outright.
fn validate_fields(
    category: Category,
    fields: &HashMap<String, String>,
) -> Result<(), ApplicationError> {
    for key in fields.keys() {
        if !category.knows_field(key) {
            return Err(ApplicationError::UnknownField {
                category,
                field: key.clone(),
            });
        }
    }

    let missing: Vec<String> = category
        .required_fields()
        .iter()
        .filter(|key| {
            fields
                .get(**key)
                .map(|value| value.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|key| key.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ApplicationError::MissingFields {
            category,
            fields: missing,
        });
    }

    Ok(())
}
