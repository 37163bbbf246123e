//! Asynchronous Discord notices for decided applications.
//!
//! Deciding an application enqueues a job on a bounded channel; a single
//! worker task drains the queue and posts the category's webhook embed.
//! Delivery is fire and forget: every failure is logged and swallowed so
//! the admin request that triggered the notice never waits on Discord.

pub mod delivery;
pub mod dispatcher;

pub use dispatcher::NotificationDispatcher;

use crate::model::application::{ApplicationStatus, Category};

/// A queued status notice for one decided application.
#[derive(Debug, Clone)]
pub struct NotificationJob {
    pub application_id: i32,
    pub category: Category,
    pub status: ApplicationStatus,
    pub discord_handle: String,
}
