//! Sound player port for the shell's renderer side
//!
//! The dispatcher only sends a `PlaySound` message; the embedding loop
//! uses this port to actually produce audio.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::SoundName;

/// Errors that can occur during sound playback
#[derive(Error, Debug)]
pub enum SoundError {
    /// Failed to play the sound
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),
}

/// Port trait for notification sound playback
#[async_trait]
pub trait SoundPlayer: Send + Sync {
    /// Play a named notification sound
    async fn play(&self, sound: SoundName) -> Result<(), SoundError>;
}
