//! No-op DND probe
//!
//! Used on platforms without a DND concept; never suppresses.

use async_trait::async_trait;

use crate::application::ports::{DndError, DndProbe};
use crate::domain::notification::DndState;

/// Probe that always reports DND inactive
pub struct AlwaysInactiveProbe;

impl AlwaysInactiveProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AlwaysInactiveProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DndProbe for AlwaysInactiveProbe {
    async fn state(&self) -> Result<DndState, DndError> {
        Ok(DndState::Inactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn never_suppresses() {
        let probe = AlwaysInactiveProbe::new();
        assert_eq!(probe.state().await.unwrap(), DndState::Inactive);
    }
}
