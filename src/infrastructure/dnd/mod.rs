//! Do-not-disturb probe adapters
//!
//! One probe per OS family, selected once at startup by
//! [`create_dnd_probe`]. Every probe queries the OS fresh on each call.

mod focus_assist;
mod linux;
mod macos;
mod noop;

pub use focus_assist::FocusAssistProbe;
pub use linux::{DesktopEnvironment, LinuxDndProbe};
pub use macos::MacosDndProbe;
pub use noop::AlwaysInactiveProbe;

use crate::application::ports::DndProbe;
use crate::domain::config::AppConfig;

/// Create the DND probe for the current platform
#[cfg(windows)]
pub fn create_dnd_probe(config: &AppConfig) -> Box<dyn DndProbe> {
    Box::new(FocusAssistProbe::new(config.priority_app_or_default()))
}

/// Create the DND probe for the current platform
#[cfg(target_os = "macos")]
pub fn create_dnd_probe(_config: &AppConfig) -> Box<dyn DndProbe> {
    Box::new(MacosDndProbe::new())
}

/// Create the DND probe for the current platform
#[cfg(target_os = "linux")]
pub fn create_dnd_probe(_config: &AppConfig) -> Box<dyn DndProbe> {
    Box::new(LinuxDndProbe::new())
}

/// Create the DND probe for the current platform.
/// Platforms without a DND concept never suppress.
#[cfg(not(any(windows, target_os = "macos", target_os = "linux")))]
pub fn create_dnd_probe(_config: &AppConfig) -> Box<dyn DndProbe> {
    Box::new(AlwaysInactiveProbe::new())
}
