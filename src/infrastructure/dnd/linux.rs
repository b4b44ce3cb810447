//! Linux DND probe
//!
//! There is no single DND switch on Linux; each desktop environment keeps
//! its own. The probe picks the query tool from `XDG_CURRENT_DESKTOP` and
//! treats unknown desktops as not disturbed.

use std::env;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{DndError, DndProbe};
use crate::domain::notification::DndState;

/// Desktop environment families with a known DND setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopEnvironment {
    Gnome,
    Cinnamon,
    Xfce,
    Kde,
    Unknown,
}

impl DesktopEnvironment {
    /// Classify an `XDG_CURRENT_DESKTOP` value (colon-separated, mixed case)
    pub fn detect(xdg_current_desktop: &str) -> Self {
        let lower = xdg_current_desktop.to_lowercase();
        if lower.contains("gnome") || lower.contains("unity") || lower.contains("pantheon") {
            DesktopEnvironment::Gnome
        } else if lower.contains("cinnamon") {
            DesktopEnvironment::Cinnamon
        } else if lower.contains("xfce") {
            DesktopEnvironment::Xfce
        } else if lower.contains("kde") || lower.contains("plasma") {
            DesktopEnvironment::Kde
        } else {
            DesktopEnvironment::Unknown
        }
    }
}

/// DND probe delegating to the desktop environment's own setting
pub struct LinuxDndProbe;

impl LinuxDndProbe {
    pub fn new() -> Self {
        Self
    }

    async fn run_query(tool: &str, args: &[&str]) -> Result<String, DndError> {
        let output = Command::new(tool)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| DndError::QueryFailed {
                tool: tool.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(DndError::QueryFailed {
                tool: tool.to_string(),
                message: format!("exited with status {}", output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Parse a boolean answer where `expected_active` is the string that
    /// means DND is on.
    fn parse_bool_answer(answer: &str, expected_active: &str) -> Result<DndState, DndError> {
        match answer {
            a if a == expected_active => Ok(DndState::Active),
            "true" | "false" => Ok(DndState::Inactive),
            other => Err(DndError::UnexpectedOutput(other.to_string())),
        }
    }
}

impl Default for LinuxDndProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DndProbe for LinuxDndProbe {
    async fn state(&self) -> Result<DndState, DndError> {
        let desktop = env::var("XDG_CURRENT_DESKTOP").unwrap_or_default();

        match DesktopEnvironment::detect(&desktop) {
            DesktopEnvironment::Gnome => {
                // show-banners=false means DND
                let answer = Self::run_query(
                    "gsettings",
                    &["get", "org.gnome.desktop.notifications", "show-banners"],
                )
                .await?;
                Self::parse_bool_answer(&answer, "false")
            }
            DesktopEnvironment::Cinnamon => {
                let answer = Self::run_query(
                    "gsettings",
                    &[
                        "get",
                        "org.cinnamon.desktop.notifications",
                        "display-notifications",
                    ],
                )
                .await?;
                Self::parse_bool_answer(&answer, "false")
            }
            DesktopEnvironment::Xfce => {
                let answer = Self::run_query(
                    "xfconf-query",
                    &["-c", "xfce4-notifyd", "-p", "/do-not-disturb"],
                )
                .await?;
                Self::parse_bool_answer(&answer, "true")
            }
            DesktopEnvironment::Kde => {
                let answer = Self::run_query(
                    "qdbus",
                    &[
                        "org.freedesktop.Notifications",
                        "/org/freedesktop/Notifications",
                        "org.freedesktop.Notifications.Inhibited",
                    ],
                )
                .await?;
                Self::parse_bool_answer(&answer, "true")
            }
            DesktopEnvironment::Unknown => Ok(DndState::Inactive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_gnome_variants() {
        assert_eq!(
            DesktopEnvironment::detect("ubuntu:GNOME"),
            DesktopEnvironment::Gnome
        );
        assert_eq!(
            DesktopEnvironment::detect("Unity"),
            DesktopEnvironment::Gnome
        );
        assert_eq!(
            DesktopEnvironment::detect("Pantheon"),
            DesktopEnvironment::Gnome
        );
    }

    #[test]
    fn detects_other_desktops() {
        assert_eq!(
            DesktopEnvironment::detect("X-Cinnamon"),
            DesktopEnvironment::Cinnamon
        );
        assert_eq!(DesktopEnvironment::detect("XFCE"), DesktopEnvironment::Xfce);
        assert_eq!(DesktopEnvironment::detect("KDE"), DesktopEnvironment::Kde);
        assert_eq!(
            DesktopEnvironment::detect("plasma"),
            DesktopEnvironment::Kde
        );
    }

    #[test]
    fn unknown_desktop_is_unknown() {
        assert_eq!(
            DesktopEnvironment::detect("sway"),
            DesktopEnvironment::Unknown
        );
        assert_eq!(DesktopEnvironment::detect(""), DesktopEnvironment::Unknown);
    }

    #[test]
    fn parse_gnome_answers() {
        // GNOME reports show-banners; false means DND is on
        assert_eq!(
            LinuxDndProbe::parse_bool_answer("false", "false").unwrap(),
            DndState::Active
        );
        assert_eq!(
            LinuxDndProbe::parse_bool_answer("true", "false").unwrap(),
            DndState::Inactive
        );
    }

    #[test]
    fn parse_xfce_answers() {
        // Xfce reports do-not-disturb; true means DND is on
        assert_eq!(
            LinuxDndProbe::parse_bool_answer("true", "true").unwrap(),
            DndState::Active
        );
        assert_eq!(
            LinuxDndProbe::parse_bool_answer("false", "true").unwrap(),
            DndState::Inactive
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(LinuxDndProbe::parse_bool_answer("maybe", "true").is_err());
    }
}
