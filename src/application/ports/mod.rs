//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod dnd;
pub mod presenter;
pub mod shell;
pub mod sound;

// Re-export common types
pub use config::ConfigStore;
pub use dnd::{DndError, DndProbe};
pub use presenter::{Interaction, NotificationPresenter, PresentError};
pub use shell::{ShellCommand, WindowShell};
pub use sound::{SoundError, SoundPlayer};
