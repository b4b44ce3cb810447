//! Merged presentation options handed to a presenter

use crate::domain::config::AppConfig;
use crate::domain::notification::NotificationRequest;

/// Default icon when neither config nor request names one.
/// Freedesktop theme name on Linux, ignored by richer backends.
pub const DEFAULT_ICON: &str = "parley";

/// Default seconds before the OS notifier reports a timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default application display name
pub const DEFAULT_APP_NAME: &str = "Parley";

/// Default Windows AUMID
pub const DEFAULT_APP_ID: &str = "Parley.Desktop";

/// Fully-merged options for one presentation, default < config < request.
///
/// `replace_id` is the tag's channel number when the request carried a
/// tag; it serves as both the OS notification id and the directive to
/// replace the prior notification with the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentOptions {
    pub title: String,
    pub message: String,
    pub app_name: String,
    pub app_id: String,
    pub icon: String,
    pub timeout_secs: u64,
    /// Whether the OS notifier itself should play its sound
    pub os_sound: bool,
    pub replace_id: Option<u32>,
    pub channel_id: Option<String>,
    pub team_id: Option<String>,
}

impl PresentOptions {
    /// Merge configured defaults with a request
    pub fn merge(config: &AppConfig, request: &NotificationRequest) -> Self {
        Self {
            title: request.title.clone(),
            message: request.message.clone(),
            app_name: config
                .app_name
                .clone()
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_id: config
                .app_id
                .clone()
                .unwrap_or_else(|| DEFAULT_APP_ID.to_string()),
            icon: config
                .icon
                .clone()
                .unwrap_or_else(|| DEFAULT_ICON.to_string()),
            timeout_secs: config.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
            os_sound: false,
            replace_id: request.tag.map(|t| t.channel()),
            channel_id: request.channel_id.clone(),
            team_id: request.team_id.clone(),
        }
    }
}
