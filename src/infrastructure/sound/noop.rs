//! No-op sound player
//!
//! Used when sound is disabled or no audio device exists.

use async_trait::async_trait;

use crate::application::ports::{SoundError, SoundPlayer};
use crate::domain::notification::SoundName;

/// Sound player that does nothing
pub struct NoOpSoundPlayer;

impl NoOpSoundPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SoundPlayer for NoOpSoundPlayer {
    async fn play(&self, _sound: SoundName) -> Result<(), SoundError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_returns_ok() {
        let player = NoOpSoundPlayer::new();
        for sound in SoundName::ALL {
            assert!(player.play(*sound).await.is_ok());
        }
    }
}
