//! Application domain models and the category schema table.
//!
//! A single generic `Application` covers all three application kinds; the
//! differences between them live entirely in `Category`: which narrative
//! field keys the form carries, which existing statuses block a new
//! submission, and whether a whitelist approval is a prerequisite.

use std::{collections::HashMap, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// The three independent application kinds.
///
/// Serialized lowercase on the wire and in the store (`whitelist`, `police`,
/// `ems`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Whitelist,
    Police,
    Ems,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Whitelist, Category::Police, Category::Ems];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Whitelist => "whitelist",
            Category::Police => "police",
            Category::Ems => "ems",
        }
    }

    /// Narrative field keys that must be present and non-blank at submission.
    ///
    /// The shared applicant block (name, age, Discord username) is carried as
    /// first-class columns and is not part of this table.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Category::Whitelist => &[
                "character_name",
                "character_age",
                "character_background",
                "rp_duration",
                "rp_interest",
                "scenario_robbery",
                "scenario_injury",
                "scenario_conflict",
                "rule_adherence",
                "server_choice",
            ],
            Category::Police => &[
                "police_motivation",
                "good_police_qualities",
                "balance_law_and_fun",
            ],
            Category::Ems => &["ems_motivation", "good_ems_qualities", "ensure_fun_rp"],
        }
    }

    /// Narrative field keys accepted but not required.
    pub fn optional_fields(&self) -> &'static [&'static str] {
        match self {
            Category::Whitelist => &[
                "rp_experience",
                "other_servers",
                "tech_setup",
                "additional_info",
            ],
            Category::Police | Category::Ems => &[],
        }
    }

    /// Whether `key` belongs to this category's form schema at all.
    pub fn knows_field(&self, key: &str) -> bool {
        self.required_fields().contains(&key) || self.optional_fields().contains(&key)
    }

    /// Existing statuses that block a new submission in this category.
    ///
    /// Whitelist blocks only on a pending application: an approved whitelist
    /// is a standing credential and the player may re-apply. Police and EMS
    /// block on pending and approved alike, since an approval there means the
    /// seat is held.
    pub fn blocking_statuses(&self) -> &'static [ApplicationStatus] {
        match self {
            Category::Whitelist => &[ApplicationStatus::Afventer],
            Category::Police | Category::Ems => {
                &[ApplicationStatus::Afventer, ApplicationStatus::Godkendt]
            }
        }
    }

    /// Whether applicants must already be whitelisted to submit.
    pub fn requires_whitelist(&self) -> bool {
        matches!(self, Category::Police | Category::Ems)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "whitelist" => Ok(Category::Whitelist),
            "police" => Ok(Category::Police),
            "ems" => Ok(Category::Ems),
            _ => Err(InternalError::UnknownCategory {
                value: value.to_string(),
            }),
        }
    }
}

/// The fixed status vocabulary shared by every category.
///
/// Stored and serialized as the Danish uppercase terms the community uses:
/// `AFVENTER` (pending), `GODKENDT` (approved), `AFVIST` (rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    Afventer,
    Godkendt,
    Afvist,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Afventer => "AFVENTER",
            ApplicationStatus::Godkendt => "GODKENDT",
            ApplicationStatus::Afvist => "AFVIST",
        }
    }

    /// Terminal statuses admit no further transition; re-submission means a
    /// brand-new application record.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Godkendt | ApplicationStatus::Afvist
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "AFVENTER" => Ok(ApplicationStatus::Afventer),
            "GODKENDT" => Ok(ApplicationStatus::Godkendt),
            "AFVIST" => Ok(ApplicationStatus::Afvist),
            _ => Err(InternalError::UnknownStatus {
                value: value.to_string(),
            }),
        }
    }
}

/// A submitted application with its narrative answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    /// SteamID64 of the applicant.
    pub steam_id: u64,
    pub category: Category,
    /// Applicant's real-world name as entered on the form.
    pub name: String,
    pub age: i32,
    /// Applicant's Discord username, used for notifications and designations.
    pub discord: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    /// Narrative answers keyed by the category's field keys.
    pub fields: HashMap<String, String>,
}

impl Application {
    /// Converts an entity model plus its field rows to a domain model at the
    /// repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The application row from the database
    /// - `fields` - The narrative answers, already keyed by field key
    ///
    /// # Returns
    /// - `Ok(Application)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - A stored id, category, or status
    ///   column failed to parse, indicating corrupted data
    pub fn from_entity(
        entity: entity::application::Model,
        fields: HashMap<String, String>,
    ) -> Result<Self, AppError> {
        let steam_id = parse_u64_from_string(entity.steam_id)?;
        let category = Category::from_str(&entity.category)?;
        let status = ApplicationStatus::from_str(&entity.status)?;

        Ok(Self {
            id: entity.id,
            steam_id,
            category,
            name: entity.name,
            age: entity.age,
            discord: entity.discord,
            status,
            created_at: entity.created_at,
            fields,
        })
    }

    /// Converts the application domain model to a DTO for API responses.
    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            steam_id: self.steam_id,
            category: self.category,
            name: self.name,
            age: self.age,
            discord: self.discord,
            status: self.status,
            created_at: self.created_at,
            fields: self.fields,
        }
    }
}

/// Parameters for creating a new application in `AFVENTER`.
#[derive(Debug, Clone)]
pub struct CreateApplicationParam {
    pub steam_id: u64,
    pub category: Category,
    pub name: String,
    pub age: i32,
    pub discord: String,
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub steam_id: u64,
    pub category: Category,
    pub name: String,
    pub age: i32,
    pub discord: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub fields: HashMap<String, String>,
}

/// Submission body; the category comes from the request path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateApplicationDto {
    pub name: String,
    pub age: i32,
    pub discord: String,
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    pub status: ApplicationStatus,
}

/// The operator-chosen outcome of a whitelist designation grant.
///
/// Independent of the application's stored status: `accept` assigns the
/// whitelisted Discord role, `deny` assigns the rejected role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DesignationOutcome {
    Accept,
    Deny,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DesignationDto {
    pub outcome: DesignationOutcome,
}
