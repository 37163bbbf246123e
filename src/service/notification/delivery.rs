use std::sync::Arc;
use std::time::Duration;

use serenity::all::{CreateEmbed, CreateEmbedFooter, ExecuteWebhook, Timestamp, Webhook};
use serenity::http::Http;

use crate::{
    config::DiscordConfig,
    error::AppError,
    model::application::ApplicationStatus,
    service::{discord::DiscordGuildService, notification::NotificationJob},
};

/// Upper bound on a single delivery, member lookup included.
pub(super) const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

const EMBED_TITLE: &str = "AvanhaRP";
const EMBED_FOOTER: &str = "Avanha System";

/// Posts status embeds to the category webhooks. Owned by the worker task.
pub struct NotificationDelivery {
    http: Arc<Http>,
    discord: DiscordConfig,
}

impl NotificationDelivery {
    pub fn new(http: Arc<Http>, discord: DiscordConfig) -> Self {
        Self { http, discord }
    }

    /// Posts the status embed to the category's webhook channel.
    ///
    /// The applicant's Discord username is resolved to a guild member for
    /// the mention line. A handle that does not resolve downgrades the
    /// notice to embed-only rather than failing it.
    ///
    /// # Arguments
    /// - `job` - The queued notice to deliver
    ///
    /// # Returns
    /// - `Ok(())` - Webhook accepted the message
    /// - `Err(AppError)` - Webhook lookup or execution failed
    pub async fn deliver(&self, job: &NotificationJob) -> Result<(), AppError> {
        let member_id = match DiscordGuildService::new(&self.http, self.discord.guild_id)
            .find_member_id(&job.discord_handle)
            .await
        {
            Ok(Some(id)) => Some(id),
            Ok(None) => {
                tracing::warn!(
                    "No guild member named '{}', sending notice without mention",
                    job.discord_handle
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    "Member lookup for '{}' failed, sending notice without mention: {}",
                    job.discord_handle,
                    e
                );
                None
            }
        };

        let webhook = Webhook::from_url(&self.http, self.discord.webhook_for(job.category)).await?;

        let mut message = ExecuteWebhook::new().embed(status_embed(job.status));
        if let Some(id) = member_id {
            message = message.content(format!("<@{}>", id));
        }

        webhook.execute(&self.http, false, message).await?;

        tracing::debug!(
            "Delivered {} notice for application {} to the {} channel",
            job.status,
            job.application_id,
            job.category
        );

        Ok(())
    }
}

fn status_embed(status: ApplicationStatus) -> CreateEmbed {
    CreateEmbed::new()
        .title(EMBED_TITLE)
        .description(format!("**Din Ansøgning Er** {}", status))
        .color(status_color(status))
        .footer(CreateEmbedFooter::new(EMBED_FOOTER))
        .timestamp(Timestamp::now())
}

/// Approved reads green, rejected red, anything else white.
fn status_color(status: ApplicationStatus) -> u32 {
    match status {
        ApplicationStatus::Godkendt => 0x00ff00,
        ApplicationStatus::Afvist => 0xff0000,
        ApplicationStatus::Afventer => 0xffffff,
    }
}
