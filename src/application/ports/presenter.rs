//! Notification presentation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::PresentOptions;

/// Presentation errors
#[derive(Debug, Clone, Error)]
pub enum PresentError {
    #[error("notification not supported")]
    Unsupported,

    #[error("Missing arguments: notification has no target channel")]
    MissingChannel,

    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to show notification: {0}")]
    ShowFailed(String),
}

/// How the user (or the OS) resolved a presented notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The user clicked the notification
    Activated,
    /// The notification expired without interaction
    TimedOut,
    /// The user dismissed the notification
    Dismissed,
    /// The notification was shown; no further interaction is observable
    Shown,
}

/// Port for presenting one notification and awaiting its resolution.
///
/// Exactly one `Interaction` is reported per call; the call does not
/// return until the OS has resolved the notification (or immediately
/// with `Shown` on backends that cannot observe interaction).
#[async_trait]
pub trait NotificationPresenter: Send + Sync {
    /// Present a notification with the given merged options
    async fn present(&self, options: PresentOptions) -> Result<Interaction, PresentError>;
}

/// Blanket implementation for boxed presenter types
#[async_trait]
impl NotificationPresenter for Box<dyn NotificationPresenter> {
    async fn present(&self, options: PresentOptions) -> Result<Interaction, PresentError> {
        self.as_ref().present(options).await
    }
}
