use serenity::all::{GuildId, Http, RoleId, UserId};

use crate::error::AppError;

pub struct DiscordGuildService<'a> {
    http: &'a Http,
    guild_id: GuildId,
}

impl<'a> DiscordGuildService<'a> {
    pub fn new(http: &'a Http, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }

    /// Looks up a guild member by their exact Discord username.
    ///
    /// Requires the GUILD_MEMBERS privileged intent on the bot.
    ///
    /// # Arguments
    /// - `username` - The Discord username (not the guild nickname)
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Discord user ID of the matching member
    /// - `Ok(None)` - No member with that username
    /// - `Err(AppError::DiscordErr)` - Discord API call failed
    pub async fn find_member_id(&self, username: &str) -> Result<Option<u64>, AppError> {
        let members = self
            .http
            .get_guild_members(self.guild_id, None, None)
            .await?;

        Ok(members
            .iter()
            .find(|m| m.user.name == username)
            .map(|m| m.user.id.get()))
    }

    /// Grants a role to a guild member.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the member
    /// - `role_id` - Discord role ID to grant
    /// - `reason` - Audit log reason shown in the guild's audit log
    pub async fn grant_role(
        &self,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                self.guild_id,
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(reason),
            )
            .await?;

        tracing::info!(
            "Granted role {} to user {} in guild {}",
            role_id,
            user_id,
            self.guild_id
        );

        Ok(())
    }
}
