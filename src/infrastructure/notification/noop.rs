//! No-op notification presenter
//!
//! Used when notifications are disabled.

use async_trait::async_trait;

use crate::application::ports::{Interaction, NotificationPresenter, PresentError};
use crate::domain::notification::PresentOptions;

/// Presenter that shows nothing and reports `Shown`
pub struct NoOpPresenter;

impl NoOpPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPresenter for NoOpPresenter {
    async fn present(&self, _options: PresentOptions) -> Result<Interaction, PresentError> {
        Ok(Interaction::Shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;
    use crate::domain::notification::NotificationRequest;

    #[tokio::test]
    async fn noop_reports_shown() {
        let presenter = NoOpPresenter::new();
        let request = NotificationRequest::new("Parley", "hi");
        let options = PresentOptions::merge(&AppConfig::empty(), &request);

        assert_eq!(presenter.present(options).await.unwrap(), Interaction::Shown);
    }
}
