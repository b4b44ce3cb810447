//! macOS banner presenter
//!
//! The banner path needs a target channel to route a click back into the
//! app, so missing inputs are typed errors rather than silent no-shows.
//! The banner resolves on "shown"; clicks are delivered to the app bundle
//! out of band, not through this API.

use async_trait::async_trait;

use crate::application::ports::{Interaction, NotificationPresenter, PresentError};
use crate::domain::notification::PresentOptions;

/// macOS notification presenter
pub struct MacosPresenter;

impl MacosPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Check the inputs the banner path requires
    fn validate(options: &PresentOptions) -> Result<(), PresentError> {
        if options.channel_id.is_none() {
            return Err(PresentError::MissingChannel);
        }
        Ok(())
    }
}

impl Default for MacosPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPresenter for MacosPresenter {
    async fn present(&self, options: PresentOptions) -> Result<Interaction, PresentError> {
        Self::validate(&options)?;

        #[cfg(target_os = "macos")]
        {
            tokio::task::spawn_blocking(move || {
                let mut notification = notify_rust::Notification::new();
                notification
                    .appname(&options.app_name)
                    .summary(&options.title)
                    .body(&options.message);

                if let Some(ref channel) = options.channel_id {
                    notification.subtitle(channel);
                }

                notification
                    .show()
                    .map_err(|e| PresentError::ShowFailed(e.to_string()))?;

                Ok(Interaction::Shown)
            })
            .await
            .map_err(|e| PresentError::ShowFailed(format!("Task join error: {}", e)))?
        }

        #[cfg(not(target_os = "macos"))]
        {
            let _ = options;
            Err(PresentError::Unsupported)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;
    use crate::domain::notification::NotificationRequest;

    fn options(request: &NotificationRequest) -> PresentOptions {
        PresentOptions::merge(&AppConfig::empty(), request)
    }

    #[tokio::test]
    async fn missing_channel_is_a_typed_error() {
        let presenter = MacosPresenter::new();
        let request = NotificationRequest::new("Parley", "hi");

        let err = presenter.present(options(&request)).await.unwrap_err();
        assert!(matches!(err, PresentError::MissingChannel));
    }

    #[cfg(not(target_os = "macos"))]
    #[tokio::test]
    async fn unsupported_off_macos() {
        let presenter = MacosPresenter::new();
        let request = NotificationRequest::new("Parley", "hi").with_channel("town-square");

        let err = presenter.present(options(&request)).await.unwrap_err();
        assert!(matches!(err, PresentError::Unsupported));
    }
}
