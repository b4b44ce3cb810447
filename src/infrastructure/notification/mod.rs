//! Notification presentation adapters
//!
//! The system presenter (notify-rust) handles all three OS families;
//! `notify-send` is a subprocess fallback for Linux servers where the
//! primary backend misbehaves, and the macOS presenter adds the channel
//! validation the banner path requires.

mod macos;
mod noop;
mod notify_rust;
mod notify_send;

pub use macos::MacosPresenter;
pub use noop::NoOpPresenter;
pub use notify_rust::SystemPresenter;
pub use notify_send::NotifySendPresenter;

use std::fmt;
use std::str::FromStr;

use crate::application::ports::NotificationPresenter;

/// User preference for the presentation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierBackend {
    /// Native OS notifier via notify-rust (default on all platforms)
    #[default]
    System,
    /// notify-send subprocess (Linux fallback)
    NotifySend,
    /// Present nothing; notifications are disabled
    None,
}

impl fmt::Display for NotifierBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierBackend::System => write!(f, "system"),
            NotifierBackend::NotifySend => write!(f, "notify-send"),
            NotifierBackend::None => write!(f, "none"),
        }
    }
}

/// Error type for parsing a backend preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid backend '{}'. Valid options: system, notify-send, none",
            self.value
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for NotifierBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(NotifierBackend::System),
            "notify-send" | "notify_send" => Ok(NotifierBackend::NotifySend),
            "none" => Ok(NotifierBackend::None),
            _ => Err(ParseBackendError {
                value: s.to_string(),
            }),
        }
    }
}

/// Create the presenter for a backend preference.
///
/// With the `System` preference the macOS presenter is selected on
/// macOS (it validates the banner path's required channel), the
/// notify-rust presenter everywhere else.
pub fn create_presenter(backend: NotifierBackend) -> Box<dyn NotificationPresenter> {
    match backend {
        #[cfg(target_os = "macos")]
        NotifierBackend::System => Box::new(MacosPresenter::new()),
        #[cfg(not(target_os = "macos"))]
        NotifierBackend::System => Box::new(SystemPresenter::new()),
        NotifierBackend::NotifySend => Box::new(NotifySendPresenter::new()),
        NotifierBackend::None => Box::new(NoOpPresenter::new()),
    }
}
