//! Notification value objects

pub mod dnd;
pub mod options;
pub mod request;
pub mod sound;
pub mod tag;

pub use dnd::{DndState, FocusAssistLevel};
pub use options::PresentOptions;
pub use request::{NotificationId, NotificationRequest};
pub use sound::SoundName;
pub use tag::Tag;
