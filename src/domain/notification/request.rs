//! Notification request value object

use std::fmt;

use crate::domain::notification::{SoundName, Tag};

/// Identifier for an in-flight notification.
///
/// Tagged notifications use the tag's channel number so repeat dispatches
/// coalesce; untagged notifications get a generated id from the top of the
/// u32 range so they never collide with channel numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u32);

impl NotificationId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn from_tag(tag: Tag) -> Self {
        Self(tag.channel())
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single notification to present.
///
/// Transient: constructed by the caller, consumed by one dispatch, never
/// persisted. Interaction callbacks travel separately (see the dispatcher's
/// `InteractionCallbacks`) so the request itself stays `Clone`.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    /// Channel tag; a later request with the same tag replaces this one in the tray
    pub tag: Option<Tag>,
    /// Suppress the shell sound even when `sound` is set
    pub silent: bool,
    /// Shell sound to play after presentation
    pub sound: Option<SoundName>,
    /// Target channel, required by the macOS banner path
    pub channel_id: Option<String>,
    /// Owning team, forwarded to richer platforms
    pub team_id: Option<String>,
}

impl NotificationRequest {
    /// Create a minimal request with just title and message
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            tag: None,
            silent: false,
            sound: None,
            channel_id: None,
            team_id: None,
        }
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_sound(mut self, sound: SoundName) -> Self {
        self.sound = Some(sound);
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let request = NotificationRequest::new("Parley", "New message")
            .with_tag(Tag::new(42))
            .with_sound(SoundName::Bing)
            .silent(true)
            .with_channel("town-square")
            .with_team("core");

        assert_eq!(request.title, "Parley");
        assert_eq!(request.message, "New message");
        assert_eq!(request.tag, Some(Tag::new(42)));
        assert_eq!(request.sound, Some(SoundName::Bing));
        assert!(request.silent);
        assert_eq!(request.channel_id.as_deref(), Some("town-square"));
        assert_eq!(request.team_id.as_deref(), Some("core"));
    }

    #[test]
    fn id_from_tag_uses_channel_number() {
        let id = NotificationId::from_tag(Tag::new(42));
        assert_eq!(id.value(), 42);
    }
}
