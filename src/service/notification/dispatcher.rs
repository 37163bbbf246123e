use std::sync::Arc;

use serenity::http::Http;
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::config::DiscordConfig;
use crate::service::notification::delivery::{NotificationDelivery, DELIVERY_TIMEOUT};
use crate::service::notification::NotificationJob;

/// Pending notices beyond this are dropped rather than blocking requests.
const QUEUE_CAPACITY: usize = 64;

/// Sending half of the notification queue, cloned into request handlers.
#[derive(Clone)]
pub struct NotificationDispatcher {
    tx: mpsc::Sender<NotificationJob>,
}

impl NotificationDispatcher {
    /// Spawns the delivery worker and returns the dispatch handle.
    ///
    /// The worker drains the queue for the lifetime of the process. Each
    /// delivery runs under [`DELIVERY_TIMEOUT`]; a slow or failed delivery
    /// is logged and the worker moves on to the next job.
    ///
    /// # Arguments
    /// - `discord_http` - Shared Discord HTTP client for member lookup
    /// - `discord` - Guild and webhook configuration
    pub fn spawn(discord_http: Arc<Http>, discord: DiscordConfig) -> Self {
        let (tx, mut rx) = mpsc::channel::<NotificationJob>(QUEUE_CAPACITY);

        tokio::spawn(async move {
            let delivery = NotificationDelivery::new(discord_http, discord);

            while let Some(job) = rx.recv().await {
                match timeout(DELIVERY_TIMEOUT, delivery.deliver(&job)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        tracing::warn!(
                            "Failed to deliver {} notice for application {} ({}): {}",
                            job.status,
                            job.application_id,
                            job.discord_handle,
                            e
                        );
                    }
                    Err(_) => {
                        tracing::warn!(
                            "Delivery of {} notice for application {} ({}) timed out",
                            job.status,
                            job.application_id,
                            job.discord_handle
                        );
                    }
                }
            }
        });

        Self { tx }
    }

    /// Wraps an existing sender without spawning a worker.
    ///
    /// Lets tests attach a receiver and inspect what would have been
    /// delivered.
    pub fn for_sender(tx: mpsc::Sender<NotificationJob>) -> Self {
        Self { tx }
    }

    /// Queues a status notice without waiting for delivery.
    ///
    /// Never blocks and never fails the caller. A full or closed queue
    /// drops the notice with a warning.
    pub fn enqueue(&self, job: NotificationJob) {
        if let Err(e) = self.tx.try_send(job) {
            tracing::warn!("Dropping status notice, queue unavailable: {}", e);
        }
    }
}
