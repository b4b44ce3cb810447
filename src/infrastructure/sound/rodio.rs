//! Rodio-based sound player
//!
//! Synthesizes a distinct tone pattern per catalog sound so the demo
//! shell loop can honor `PlaySound` without shipping audio assets.

use std::time::Duration;

use async_trait::async_trait;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::application::ports::{SoundError, SoundPlayer};
use crate::domain::notification::SoundName;

/// Sound player implementation using rodio
pub struct RodioSoundPlayer;

impl RodioSoundPlayer {
    /// Create a new rodio-based sound player
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SoundPlayer for RodioSoundPlayer {
    async fn play(&self, sound: SoundName) -> Result<(), SoundError> {
        // Run audio playback in blocking thread to avoid blocking the async runtime
        tokio::task::spawn_blocking(move || play_sound_sync(sound))
            .await
            .map_err(|e| SoundError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

/// Create a gentle tone with fade in for a smoother sound
fn gentle_tone(freq: f32, duration_ms: u64, amplitude: f32) -> impl Source<Item = f32> + Send {
    let fade_ms = (duration_ms / 5).min(30); // 20% fade or max 30ms
    SineWave::new(freq)
        .take_duration(Duration::from_millis(duration_ms))
        .fade_in(Duration::from_millis(fade_ms))
        .amplify(amplitude)
}

fn gap(duration_ms: u64) -> impl Source<Item = f32> + Send {
    rodio::source::Zero::<f32>::new(1, 44100).take_duration(Duration::from_millis(duration_ms))
}

/// Play a sound synchronously (called from spawn_blocking)
fn play_sound_sync(sound: SoundName) -> Result<(), SoundError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| SoundError::PlaybackFailed(e.to_string()))?;

    const AMP: f32 = 0.3;

    match sound {
        SoundName::Bing => {
            // Single bright strike: E6
            sink.append(gentle_tone(1319.0, 180, AMP));
        }
        SoundName::Crackle => {
            // Three quick taps: G5
            for _ in 0..3 {
                sink.append(gentle_tone(784.0, 45, AMP * 0.8));
                sink.append(gap(35));
            }
        }
        SoundName::Down => {
            // Descending pair: E5 -> C5
            sink.append(gentle_tone(659.0, 90, AMP));
            sink.append(gentle_tone(523.0, 140, AMP));
        }
        SoundName::Hand => {
            // Low knock: A3 twice
            sink.append(gentle_tone(220.0, 70, AMP));
            sink.append(gap(60));
            sink.append(gentle_tone(220.0, 70, AMP));
        }
        SoundName::Ripple => {
            // Ascending run: C5 -> E5 -> G5
            sink.append(gentle_tone(523.0, 70, AMP));
            sink.append(gentle_tone(659.0, 70, AMP));
            sink.append(gentle_tone(784.0, 120, AMP));
        }
        SoundName::Upstairs => {
            // Rising pair: G4 -> D5
            sink.append(gentle_tone(392.0, 90, AMP));
            sink.append(gentle_tone(587.0, 140, AMP));
        }
    }

    // Wait for playback to complete
    sink.sleep_until_end();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: These tests require audio hardware and may not work in CI
    // They are marked as ignored by default

    #[tokio::test]
    #[ignore = "Requires audio hardware"]
    async fn can_play_every_catalog_sound() {
        let player = RodioSoundPlayer::new();
        for sound in SoundName::ALL {
            assert!(player.play(*sound).await.is_ok());
        }
    }
}
