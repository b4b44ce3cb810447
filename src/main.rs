//! Parley Notify CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parley_notify::cli::{
    app::{load_merged_config, run_dnd, run_send, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    SendOptions,
};
use parley_notify::domain::config::AppConfig;
use parley_notify::domain::notification::Tag;
use parley_notify::infrastructure::{NotifierBackend, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // CLI answers go through the presenter; tracing carries the
    // swallowed-failure log the dispatcher emits.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PARLEY_NOTIFY_LOG")
                .unwrap_or_else(|_| EnvFilter::new("parley_notify=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Dnd) => {
            let config = load_merged_config(AppConfig {
                priority_app: if cli.priority_app { Some(true) } else { None },
                ..Default::default()
            })
            .await;
            return run_dnd(config).await;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        app_name: None,
        app_id: None,
        icon: None,
        timeout: cli.timeout,
        priority_app: if cli.priority_app { Some(true) } else { None },
        backend: cli.backend.clone(),
        sound: None, // --sound names the request sound, not the default
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // The tag must be a channel number; reject it before dispatch
    let tag = match cli.tag.as_deref() {
        Some(raw) => match raw.parse::<Tag>() {
            Ok(tag) => Some(tag),
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => None,
    };

    let backend = match config.backend_or_default().parse::<NotifierBackend>() {
        Ok(backend) => backend,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = SendOptions {
        title: cli.title.unwrap_or_else(|| "Parley".to_string()),
        message: cli.message.unwrap_or_else(|| "Test notification".to_string()),
        tag,
        silent: cli.silent,
        sound: cli.sound.map(Into::into),
        channel: cli.channel,
        team: cli.team,
        backend,
    };

    run_send(options, config).await
}
