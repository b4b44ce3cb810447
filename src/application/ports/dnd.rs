//! Do-not-disturb probe port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::DndState;

/// DND probe errors
#[derive(Debug, Clone, Error)]
pub enum DndError {
    #[error("Failed to run DND query tool '{tool}': {message}")]
    QueryFailed { tool: String, message: String },

    #[error("Unexpected DND query output: {0}")]
    UnexpectedOutput(String),

    #[error("Focus-assist query failed: {0}")]
    FocusAssistUnavailable(String),
}

/// Port for querying the OS do-not-disturb state.
///
/// Implementations query the OS fresh on every call; the dispatcher never
/// caches the answer.
#[async_trait]
pub trait DndProbe: Send + Sync {
    /// Query the current do-not-disturb state
    async fn state(&self) -> Result<DndState, DndError>;
}

/// Blanket implementation for boxed probe types
#[async_trait]
impl DndProbe for Box<dyn DndProbe> {
    async fn state(&self) -> Result<DndState, DndError> {
        self.as_ref().state().await
    }
}
