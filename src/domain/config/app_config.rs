//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::notification::options::{
    DEFAULT_APP_ID, DEFAULT_APP_NAME, DEFAULT_ICON, DEFAULT_TIMEOUT_SECS,
};
use crate::domain::notification::SoundName;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name shown by the OS notifier
    pub app_name: Option<String>,
    /// Windows AUMID, also checked against the focus-assist priority list
    pub app_id: Option<String>,
    /// Icon path or freedesktop theme name
    pub icon: Option<String>,
    /// Seconds before the OS notifier reports a timeout
    pub timeout: Option<u64>,
    /// Whether the app is on the focus-assist priority allow-list
    pub priority_app: Option<bool>,
    /// Presentation backend preference (system, notify-send, none)
    pub backend: Option<String>,
    /// Default shell sound for notifications that don't name one
    pub sound: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            app_id: Some(DEFAULT_APP_ID.to_string()),
            icon: Some(DEFAULT_ICON.to_string()),
            timeout: Some(DEFAULT_TIMEOUT_SECS),
            priority_app: Some(false),
            backend: Some("system".to_string()),
            sound: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            app_id: other.app_id.or(self.app_id),
            icon: other.icon.or(self.icon),
            timeout: other.timeout.or(self.timeout),
            priority_app: other.priority_app.or(self.priority_app),
            backend: other.backend.or(self.backend),
            sound: other.sound.or(self.sound),
        }
    }

    /// Get the AUMID, or the Parley default if not set
    pub fn app_id_or_default(&self) -> &str {
        self.app_id.as_deref().unwrap_or(DEFAULT_APP_ID)
    }

    /// Get the priority-list membership, or false if not set
    pub fn priority_app_or_default(&self) -> bool {
        self.priority_app.unwrap_or(false)
    }

    /// Get the backend preference, or "system" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or("system")
    }

    /// Get the default sound as parsed SoundName, or None if unset/invalid
    pub fn sound_or_default(&self) -> Option<SoundName> {
        self.sound.as_ref().and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.app_name, Some("Parley".to_string()));
        assert_eq!(config.app_id, Some("Parley.Desktop".to_string()));
        assert_eq!(config.icon, Some("parley".to_string()));
        assert_eq!(config.timeout, Some(10));
        assert_eq!(config.priority_app, Some(false));
        assert_eq!(config.backend, Some("system".to_string()));
        assert!(config.sound.is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.app_name.is_none());
        assert!(config.app_id.is_none());
        assert!(config.icon.is_none());
        assert!(config.timeout.is_none());
        assert!(config.priority_app.is_none());
        assert!(config.backend.is_none());
        assert!(config.sound.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            app_name: Some("Parley".to_string()),
            timeout: Some(10),
            backend: Some("system".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            app_name: Some("Parley Beta".to_string()),
            timeout: None, // Should not override
            backend: Some("notify-send".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.app_name, Some("Parley Beta".to_string()));
        assert_eq!(merged.timeout, Some(10)); // Kept from base
        assert_eq!(merged.backend, Some("notify-send".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            icon: Some("/opt/parley/icon.svg".to_string()),
            priority_app: Some(true),
            ..Default::default()
        };

        let other = AppConfig::empty();
        let merged = base.merge(other);

        assert_eq!(merged.icon, Some("/opt/parley/icon.svg".to_string()));
        assert_eq!(merged.priority_app, Some(true));
    }

    #[test]
    fn sound_or_default_parses() {
        let config = AppConfig {
            sound: Some("bing".to_string()),
            ..Default::default()
        };
        assert_eq!(config.sound_or_default(), Some(SoundName::Bing));
    }

    #[test]
    fn sound_or_default_none_on_invalid() {
        let config = AppConfig {
            sound: Some("klaxon".to_string()),
            ..Default::default()
        };
        assert!(config.sound_or_default().is_none());
    }

    #[test]
    fn boolean_defaults() {
        let config = AppConfig::empty();
        assert!(!config.priority_app_or_default());
        assert_eq!(config.backend_or_default(), "system");
        assert_eq!(config.app_id_or_default(), "Parley.Desktop");
    }
}
