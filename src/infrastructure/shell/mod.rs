//! Window shell adapters

mod channel;
mod null;

pub use channel::ChannelWindowShell;
pub use null::NullWindowShell;
