//! Sound player adapters

mod noop;
mod rodio;

pub use noop::NoOpSoundPlayer;
pub use rodio::RodioSoundPlayer;
