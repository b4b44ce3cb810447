//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS notification subsystems, DND state,
//! audio output, and config storage.

pub mod config;
pub mod dnd;
pub mod notification;
pub mod shell;
pub mod sound;

// Re-export adapters
pub use config::XdgConfigStore;
pub use dnd::{create_dnd_probe, AlwaysInactiveProbe, LinuxDndProbe, MacosDndProbe};
pub use notification::{create_presenter, NotifierBackend, NotifySendPresenter, SystemPresenter};
pub use shell::{ChannelWindowShell, NullWindowShell};
pub use sound::{NoOpSoundPlayer, RodioSoundPlayer};
