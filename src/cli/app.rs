//! Command handlers for the send and dnd modes

use std::process::ExitCode;
use std::sync::Arc;

use tracing::warn;

use crate::application::ports::{DndProbe, ShellCommand, SoundPlayer};
use crate::application::{
    DispatchOutcome, InteractionCallbacks, NotificationDispatcher, NotificationRegistry,
};
use crate::domain::config::AppConfig;
use crate::domain::notification::NotificationRequest;
use crate::infrastructure::{
    create_dnd_probe, create_presenter, ChannelWindowShell, RodioSoundPlayer, XdgConfigStore,
};

use super::args::SendOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Dispatch one notification through the full stack and report the outcome
pub async fn run_send(options: SendOptions, config: AppConfig) -> ExitCode {
    let mut ui = Presenter::new();

    let probe = create_dnd_probe(&config);
    let os_presenter = create_presenter(options.backend);
    let (shell, commands) = ChannelWindowShell::channel();
    let registry = Arc::new(NotificationRegistry::new());

    let dispatcher =
        NotificationDispatcher::new(probe, os_presenter, shell, Arc::clone(&registry), config);

    // Demo shell loop: honor the commands an embedding window manager
    // would receive.
    let shell_loop = tokio::spawn(run_shell_loop(commands));

    let mut request = NotificationRequest::new(options.title, options.message);
    request.tag = options.tag;
    request.silent = options.silent;
    request.sound = options.sound;
    request.channel_id = options.channel;
    request.team_id = options.team;

    let callbacks = InteractionCallbacks {
        on_click: Some(Box::new(|| {
            eprintln!("Notification clicked");
        })),
        on_timeout: Some(Box::new(|| {
            eprintln!("Notification timed out");
        })),
    };

    ui.start_spinner("Waiting for the notification to resolve...");
    let outcome = dispatcher.dispatch(request, callbacks).await;

    // Dropping the dispatcher closes the shell channel and ends the loop
    drop(dispatcher);
    let _ = shell_loop.await;

    match outcome {
        DispatchOutcome::Presented(interaction) => {
            ui.spinner_success(&format!("Notification resolved: {:?}", interaction));
            ExitCode::from(EXIT_SUCCESS)
        }
        DispatchOutcome::Suppressed => {
            ui.stop_spinner();
            ui.info("Suppressed by do-not-disturb");
            ExitCode::from(EXIT_SUCCESS)
        }
        DispatchOutcome::Failed => {
            // The dispatch itself never fails the caller; the CLI still
            // reports that nothing appeared.
            ui.spinner_fail("Notification could not be presented (see log)");
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}

/// Print the current do-not-disturb state
pub async fn run_dnd(config: AppConfig) -> ExitCode {
    let ui = Presenter::new();
    let probe = create_dnd_probe(&config);

    match probe.state().await {
        Ok(state) => {
            if state.is_active() {
                ui.output("active");
            } else {
                ui.output("inactive");
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            ui.error(&format!("DND query failed: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Honor shell commands the way the embedding window manager would
async fn run_shell_loop(mut commands: tokio::sync::mpsc::UnboundedReceiver<ShellCommand>) {
    let ui = Presenter::new();
    let player = RodioSoundPlayer::new();

    while let Some(command) = commands.recv().await {
        match command {
            ShellCommand::PlaySound(sound) => {
                if let Err(e) = player.play(sound).await {
                    warn!(error = %e, sound = %sound, "sound playback failed");
                }
            }
            ShellCommand::FlashFrame(flash) => {
                if flash {
                    ui.info("Window frame flashed");
                }
            }
            ShellCommand::RestoreMain => {
                ui.info("Main window restored");
            }
        }
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    use crate::application::ports::ConfigStore;

    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(error = %e, "failed to load config file, using defaults");
        AppConfig::empty()
    });

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
