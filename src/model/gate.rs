//! Category gate domain model.
//!
//! One record per category holding the advisory "open for submissions" flag
//! shown to applicants. The flag is informational for clients; the
//! eligibility gate does not consult it.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, model::application::Category};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGate {
    pub category: Category,
    pub is_open: bool,
    pub updated_at: DateTime<Utc>,
}

impl CategoryGate {
    pub fn from_entity(entity: entity::category_gate::Model) -> Result<Self, AppError> {
        let category = Category::from_str(&entity.category)?;

        Ok(Self {
            category,
            is_open: entity.is_open,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CategoryGateDto {
        CategoryGateDto {
            category: self.category,
            is_open: self.is_open,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryGateDto {
    pub category: Category,
    pub is_open: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToggleGateDto {
    pub is_open: bool,
}
