//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::notification::{SoundName, Tag};
use crate::infrastructure::NotifierBackend;

/// Parley Notify - desktop notification dispatcher for the Parley shell
#[derive(Parser, Debug)]
#[command(name = "parley-notify")]
#[command(version)]
#[command(about = "Dispatch desktop notifications with per-OS do-not-disturb handling")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification title
    #[arg(short = 't', long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Notification body
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Numeric channel tag; a repeat notification with the same tag replaces the prior one
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Suppress the shell sound
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Shell sound to play after presentation
    #[arg(long, value_name = "SOUND")]
    pub sound: Option<SoundArg>,

    /// Target channel (required by the macOS banner path)
    #[arg(long, value_name = "CHANNEL")]
    pub channel: Option<String>,

    /// Owning team identifier
    #[arg(long, value_name = "TEAM")]
    pub team: Option<String>,

    /// Seconds before the notification times out
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Presentation backend (system, notify-send, none)
    #[arg(short = 'b', long, value_name = "BACKEND", env = "PARLEY_NOTIFY_BACKEND")]
    pub backend: Option<String>,

    /// Treat the app as being on the focus-assist priority list
    #[arg(long)]
    pub priority_app: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Print the current do-not-disturb state
    Dnd,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Sound argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SoundArg {
    Bing,
    Crackle,
    Down,
    Hand,
    Ripple,
    Upstairs,
}

impl From<SoundArg> for SoundName {
    fn from(arg: SoundArg) -> Self {
        match arg {
            SoundArg::Bing => SoundName::Bing,
            SoundArg::Crackle => SoundName::Crackle,
            SoundArg::Down => SoundName::Down,
            SoundArg::Hand => SoundName::Hand,
            SoundArg::Ripple => SoundName::Ripple,
            SoundArg::Upstairs => SoundName::Upstairs,
        }
    }
}

impl From<SoundName> for SoundArg {
    fn from(sound: SoundName) -> Self {
        match sound {
            SoundName::Bing => SoundArg::Bing,
            SoundName::Crackle => SoundArg::Crackle,
            SoundName::Down => SoundArg::Down,
            SoundName::Hand => SoundArg::Hand,
            SoundName::Ripple => SoundArg::Ripple,
            SoundName::Upstairs => SoundArg::Upstairs,
        }
    }
}

/// Parsed send options (default top-level mode)
#[derive(Debug, Clone)]
pub struct SendOptions {
    pub title: String,
    pub message: String,
    pub tag: Option<Tag>,
    pub silent: bool,
    pub sound: Option<SoundName>,
    pub channel: Option<String>,
    pub team: Option<String>,
    pub backend: NotifierBackend,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "app_name",
    "app_id",
    "icon",
    "timeout",
    "priority_app",
    "backend",
    "sound",
];

/// Valid backend values
pub const VALID_BACKENDS: &[&str] = &["system", "notify-send", "none"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
