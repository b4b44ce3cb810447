//! notify-send notification presenter
//!
//! Subprocess fallback for Linux servers where the D-Bus backend
//! misbehaves. With `--action`, notify-send waits until the notification
//! resolves and prints the invoked action name, so clicks stay observable.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Interaction, NotificationPresenter, PresentError};
use crate::domain::notification::PresentOptions;

/// notify-send notification presenter
pub struct NotifySendPresenter;

impl NotifySendPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Map notify-send's stdout to an interaction: the action name on
    /// click, nothing when the notification closed without one.
    fn parse_response(stdout: &str) -> Interaction {
        match stdout.trim() {
            "default" | "0" => Interaction::Activated,
            "" => Interaction::TimedOut,
            _ => Interaction::Shown,
        }
    }
}

impl Default for NotifySendPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPresenter for NotifySendPresenter {
    async fn present(&self, options: PresentOptions) -> Result<Interaction, PresentError> {
        let mut command = Command::new("notify-send");
        command
            .args(["--app-name", &options.app_name])
            .args(["--icon", &options.icon])
            .args([
                "--expire-time",
                &(options.timeout_secs * 1000).to_string(),
            ])
            .args(["--action", "default=Open"]);

        if let Some(id) = options.replace_id {
            command.args(["--replace-id", &id.to_string()]);
        }

        let output = command
            .arg(&options.title)
            .arg(&options.message)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PresentError::NotifySendNotFound
                } else {
                    PresentError::ShowFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            return Err(PresentError::ShowFailed(format!(
                "notify-send exited with status: {}",
                output.status
            )));
        }

        Ok(Self::parse_response(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }
}
