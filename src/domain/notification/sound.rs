//! Notification sound catalog

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidSoundError;

/// Named notification sounds shipped with the shell.
///
/// Playback happens in the embedding shell's renderer, not here; this
/// type only names which sound the shell should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundName {
    Bing,
    Crackle,
    Down,
    Hand,
    Ripple,
    Upstairs,
}

impl SoundName {
    /// All sounds in the catalog
    pub const ALL: &'static [SoundName] = &[
        SoundName::Bing,
        SoundName::Crackle,
        SoundName::Down,
        SoundName::Hand,
        SoundName::Ripple,
        SoundName::Upstairs,
    ];

    /// Lowercase name used in config files and on the wire to the shell
    pub const fn name(&self) -> &'static str {
        match self {
            SoundName::Bing => "bing",
            SoundName::Crackle => "crackle",
            SoundName::Down => "down",
            SoundName::Hand => "hand",
            SoundName::Ripple => "ripple",
            SoundName::Upstairs => "upstairs",
        }
    }
}

impl FromStr for SoundName {
    type Err = InvalidSoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bing" => Ok(SoundName::Bing),
            "crackle" => Ok(SoundName::Crackle),
            "down" => Ok(SoundName::Down),
            "hand" => Ok(SoundName::Hand),
            "ripple" => Ok(SoundName::Ripple),
            "upstairs" => Ok(SoundName::Upstairs),
            _ => Err(InvalidSoundError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SoundName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
