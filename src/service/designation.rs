use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::{
    config::DiscordConfig,
    data::application::ApplicationRepository,
    error::AppError,
    model::application::{ApplicationStatus, Category, DesignationOutcome},
    service::discord::DiscordGuildService,
};

/// Assigns the whitelist decision roles on the community guild.
///
/// Separate from the status transition: an admin invokes it after approving
/// a whitelist application, and a failure here never touches the stored
/// status.
pub struct DesignationService<'a> {
    db: &'a DatabaseConnection,
    http: &'a Http,
    discord: &'a DiscordConfig,
}

impl<'a> DesignationService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: &'a Http, discord: &'a DiscordConfig) -> Self {
        Self { db, http, discord }
    }

    /// Grants the outcome's guild role to the user's Discord account.
    ///
    /// The Discord username is taken from the user's newest `GODKENDT`
    /// whitelist application and resolved to a guild member by exact match.
    ///
    /// # Arguments
    /// - `steam_id` - The user being designated
    /// - `outcome` - `accept` grants the whitelisted role, `deny` the
    ///   rejected role
    ///
    /// # Returns
    /// - `Ok(())` - Role granted
    /// - `Err(AppError::NotFound)` - No approved whitelist application, or
    ///   the Discord username matches no guild member
    /// - `Err(AppError)` - Database or Discord API error
    pub async fn grant(&self, steam_id: u64, outcome: DesignationOutcome) -> Result<(), AppError> {
        let application = ApplicationRepository::new(self.db)
            .latest_with_status(steam_id, Category::Whitelist, ApplicationStatus::Godkendt)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No approved whitelist application for user {}",
                    steam_id
                ))
            })?;

        let guild = DiscordGuildService::new(self.http, self.discord.guild_id);

        let member_id = guild
            .find_member_id(&application.discord)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No guild member named '{}'", application.discord))
            })?;

        let role_id = role_for(self.discord, outcome);
        guild
            .grant_role(member_id, role_id, "Whitelist designation")
            .await?;

        tracing::info!(
            "Designated user {} ({}) with role {}",
            steam_id,
            application.discord,
            role_id
        );

        Ok(())
    }
}

/// Accept maps to the whitelisted role, deny to the rejected role.
fn role_for(discord: &DiscordConfig, outcome: DesignationOutcome) -> u64 {
    match outcome {
        DesignationOutcome::Accept => discord.whitelist_role_id,
        DesignationOutcome::Deny => discord.rejected_role_id,
    }
}
