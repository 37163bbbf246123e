//! User domain models and the per-request identity context.
//!
//! Provides the stored user model, the upsert parameters used by the login
//! flow, and `CurrentUser`: the identity context resolved once per request
//! and passed explicitly to services so no role or whitelist state ever
//! lives in process-wide mutable state.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// User roles, stored and serialized uppercase (`NORMAL`, `ADMIN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Normal,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Normal => "NORMAL",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "NORMAL" => Ok(Role::Normal),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(InternalError::UnknownRole {
                value: value.to_string(),
            }),
        }
    }
}

/// A registered portal user, created on first successful Steam login.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// SteamID64 of the user.
    pub steam_id: u64,
    /// Steam persona name, refreshed on every login.
    pub name: String,
    /// Steam avatar URL, refreshed on every login.
    pub avatar: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr)` - The stored steam id or role column
    ///   failed to parse
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let steam_id = parse_u64_from_string(entity.steam_id)?;
        let role = Role::from_str(&entity.role)?;

        Ok(Self {
            steam_id,
            name: entity.name,
            avatar: entity.avatar,
            role,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            steam_id: self.steam_id,
            name: self.name,
            avatar: self.avatar,
            role: self.role,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// Parameters for upserting a user during login.
///
/// An insert uses `role_on_create`; an existing user keeps their stored role
/// and only the profile fields and last-login timestamp are refreshed.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub steam_id: u64,
    pub name: String,
    pub avatar: String,
    pub role_on_create: Role,
}

/// The identity context attached to a request.
///
/// Recomputed by the auth guard on every request so role changes and fresh
/// whitelist approvals take effect without re-login.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub steam_id: u64,
    pub name: String,
    pub avatar: String,
    pub role: Role,
    /// True iff a whitelist application with status `GODKENDT` exists for
    /// this user.
    pub whitelisted: bool,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> CurrentUserDto {
        CurrentUserDto {
            steam_id: self.steam_id,
            name: self.name,
            avatar: self.avatar,
            role: self.role,
            whitelisted: self.whitelisted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub steam_id: u64,
    pub name: String,
    pub avatar: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserDto {
    pub steam_id: u64,
    pub name: String,
    pub avatar: String,
    pub role: Role,
    pub whitelisted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetRoleDto {
    pub role: Role,
}
