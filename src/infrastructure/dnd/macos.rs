//! macOS DND probe
//!
//! Monterey and later record active Focus modes as assertions in
//! `~/Library/DoNotDisturb/DB/Assertions.json`; a non-empty assertion
//! record list means a Focus is on. Older systems expose the legacy
//! notification-center toggle through `defaults`.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::fs;
use tokio::process::Command;

use crate::application::ports::{DndError, DndProbe};
use crate::domain::notification::DndState;

/// DND probe reading the macOS Focus state
pub struct MacosDndProbe {
    assertions_path: PathBuf,
}

impl MacosDndProbe {
    pub fn new() -> Self {
        let assertions_path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join("Library/DoNotDisturb/DB/Assertions.json");
        Self { assertions_path }
    }

    /// Create with a custom assertions file path
    pub fn with_assertions_path(path: impl Into<PathBuf>) -> Self {
        Self {
            assertions_path: path.into(),
        }
    }

    /// A Focus is active when any store assertion record exists
    fn parse_assertions(content: &str) -> Result<DndState, DndError> {
        let doc: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| DndError::UnexpectedOutput(e.to_string()))?;

        let records = doc
            .get("data")
            .and_then(|data| data.get(0))
            .and_then(|entry| entry.get("storeAssertionRecords"))
            .and_then(|records| records.as_array());

        Ok(DndState::from_bool(
            records.is_some_and(|r| !r.is_empty()),
        ))
    }

    /// Legacy pre-Monterey toggle
    async fn query_legacy_toggle() -> Result<DndState, DndError> {
        let output = Command::new("defaults")
            .args([
                "-currentHost",
                "read",
                "com.apple.notificationcenterui",
                "doNotDisturb",
            ])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| DndError::QueryFailed {
                tool: "defaults".to_string(),
                message: e.to_string(),
            })?;

        // The key is absent when DND has never been enabled
        if !output.status.success() {
            return Ok(DndState::Inactive);
        }

        match String::from_utf8_lossy(&output.stdout).trim() {
            "1" => Ok(DndState::Active),
            _ => Ok(DndState::Inactive),
        }
    }
}

impl Default for MacosDndProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DndProbe for MacosDndProbe {
    async fn state(&self) -> Result<DndState, DndError> {
        match fs::read_to_string(&self.assertions_path).await {
            Ok(content) => Self::parse_assertions(&content),
            // No assertions file on older systems; fall back to the
            // legacy toggle.
            Err(_) => Self::query_legacy_toggle().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_focus_has_assertion_records() {
        let content = r#"{
            "data": [{
                "storeAssertionRecords": [{
                    "assertionDetails": {
                        "assertionDetailsModeIdentifier": "com.apple.donotdisturb.mode.default"
                    }
                }]
            }]
        }"#;
        assert_eq!(
            MacosDndProbe::parse_assertions(content).unwrap(),
            DndState::Active
        );
    }

    #[test]
    fn no_records_means_inactive() {
        let content = r#"{"data": [{"storeAssertionRecords": []}]}"#;
        assert_eq!(
            MacosDndProbe::parse_assertions(content).unwrap(),
            DndState::Inactive
        );
    }

    #[test]
    fn missing_records_key_means_inactive() {
        let content = r#"{"data": [{}]}"#;
        assert_eq!(
            MacosDndProbe::parse_assertions(content).unwrap(),
            DndState::Inactive
        );
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(MacosDndProbe::parse_assertions("not json").is_err());
    }

    #[test]
    fn custom_assertions_path() {
        let probe = MacosDndProbe::with_assertions_path("/tmp/Assertions.json");
        assert_eq!(
            probe.assertions_path,
            PathBuf::from("/tmp/Assertions.json")
        );
    }
}
