use tokio::sync::mpsc;

use crate::{
    data::application::ApplicationRepository,
    error::{application::ApplicationError, AppError},
    model::application::{ApplicationStatus, Category},
    service::{
        lifecycle::LifecycleService,
        notification::{NotificationDispatcher, NotificationJob},
    },
};
use test_utils::{builder::TestBuilder, factory};


/// A dispatcher whose queue the test can inspect instead of delivering.
fn test_dispatcher() -> (NotificationDispatcher, mpsc::Receiver<NotificationJob>) {
    let (tx, rx) = mpsc::channel(8);
    (NotificationDispatcher::for_sender(tx), rx)
}
