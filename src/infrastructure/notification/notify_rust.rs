//! Cross-platform notification presenter using notify-rust
//!
//! XDG desktops get the full treatment: a default action so clicks are
//! observable, and tag replacement via the notification id. Windows
//! toasts and macOS banners are shown fire-and-forget; those backends
//! report `Shown`.

use async_trait::async_trait;

use crate::application::ports::{Interaction, NotificationPresenter, PresentError};
use crate::domain::notification::PresentOptions;

/// System notification presenter backed by notify-rust
pub struct SystemPresenter;

impl SystemPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPresenter for SystemPresenter {
    async fn present(&self, options: PresentOptions) -> Result<Interaction, PresentError> {
        // Showing and waiting for the user both block, so run the whole
        // round trip in spawn_blocking.
        tokio::task::spawn_blocking(move || show_and_wait(options))
            .await
            .map_err(|e| PresentError::ShowFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn show_and_wait(options: PresentOptions) -> Result<Interaction, PresentError> {
    let mut notification = notify_rust::Notification::new();
    notification
        .appname(&options.app_name)
        .summary(&options.title)
        .body(&options.message)
        .icon(&options.icon)
        .timeout(notify_rust::Timeout::Milliseconds(
            (options.timeout_secs * 1000) as u32,
        ))
        .action("default", "Open");

    // Reusing the id makes the server replace the prior notification
    // with the same tag.
    if let Some(id) = options.replace_id {
        notification.id(id);
    }

    let handle = notification
        .show()
        .map_err(|e| PresentError::ShowFailed(e.to_string()))?;

    let mut interaction = Interaction::Shown;
    handle.wait_for_action(|action| {
        interaction = match action {
            "default" => Interaction::Activated,
            // The server reports closure without saying whether the user
            // dismissed it or it expired; node-notifier called both
            // "timeout" and callers depend on that mapping.
            "__closed" => Interaction::TimedOut,
            _ => Interaction::Shown,
        };
    });

    Ok(interaction)
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn show_and_wait(options: PresentOptions) -> Result<Interaction, PresentError> {
    let mut notification = notify_rust::Notification::new();
    notification
        .appname(&options.app_name)
        .summary(&options.title)
        .body(&options.message)
        .timeout(notify_rust::Timeout::Milliseconds(
            (options.timeout_secs * 1000) as u32,
        ));

    #[cfg(target_os = "windows")]
    notification.app_id(&options.app_id);

    notification
        .show()
        .map_err(|e| PresentError::ShowFailed(e.to_string()))?;

    // Toast and banner backends cannot report interaction through this API
    Ok(Interaction::Shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presenter_creates_successfully() {
        let _presenter = SystemPresenter::new();
    }
}
