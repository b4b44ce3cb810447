//! CLI layer - argument parsing, command handlers, and output formatting

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use args::SendOptions;
