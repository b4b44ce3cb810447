//! Notification tag value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::TagParseError;

/// Channel tag identifying a notification for tray replacement.
///
/// A later notification carrying the same tag replaces the prior one in
/// the OS tray. The tag doubles as the OS notification id, so it must
/// parse to a number at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(u32);

impl Tag {
    /// Create a tag from an already-validated channel number
    pub const fn new(channel: u32) -> Self {
        Self(channel)
    }

    /// The numeric channel identifier
    pub const fn channel(&self) -> u32 {
        self.0
    }
}

impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Tag)
            .map_err(|_| TagParseError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
