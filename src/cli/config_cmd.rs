//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::domain::notification::SoundName;

use super::args::{is_valid_config_key, ConfigAction, VALID_BACKENDS, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "app_name" => config.app_name = Some(value.to_string()),
        "app_id" => config.app_id = Some(value.to_string()),
        "icon" => config.icon = Some(value.to_string()),
        "timeout" => {
            config.timeout = Some(value.parse().map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a number of seconds".to_string(),
            })?)
        }
        "priority_app" => {
            config.priority_app =
                Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be 'true' or 'false'".to_string(),
                })?)
        }
        "backend" => config.backend = Some(value.to_lowercase()),
        "sound" => config.sound = Some(value.to_lowercase()),
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "app_name" => config.app_name,
        "app_id" => config.app_id,
        "icon" => config.icon,
        "timeout" => config.timeout.map(|t| t.to_string()),
        "priority_app" => config.priority_app.map(|b| b.to_string()),
        "backend" => config.backend,
        "sound" => config.sound,
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("app_name", config.app_name.as_deref().unwrap_or("(not set)"));
    presenter.key_value("app_id", config.app_id.as_deref().unwrap_or("(not set)"));
    presenter.key_value("icon", config.icon.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "timeout",
        &config
            .timeout
            .map(|t| t.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "priority_app",
        &config
            .priority_app
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("backend", config.backend.as_deref().unwrap_or("(not set)"));
    presenter.key_value("sound", config.sound.as_deref().unwrap_or("(not set)"));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "timeout" => {
            let secs: u64 = value.parse().map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a number of seconds".to_string(),
            })?;
            if secs == 0 {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Timeout must be at least 1 second".to_string(),
                });
            }
        }
        "priority_app" => {
            parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?;
        }
        "backend" => {
            let lower = value.to_lowercase();
            if !VALID_BACKENDS.contains(&lower.as_str()) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_BACKENDS.join(", ")
                    ),
                });
            }
        }
        "sound" => {
            value
                .parse::<SoundName>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        _ => {} // app_name, app_id, and icon accept any string
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn validate_timeout_valid() {
        assert!(validate_config_value("timeout", "10").is_ok());
        assert!(validate_config_value("timeout", "1").is_ok());
    }

    #[test]
    fn validate_timeout_invalid() {
        assert!(validate_config_value("timeout", "0").is_err());
        assert!(validate_config_value("timeout", "soon").is_err());
    }

    #[test]
    fn validate_backend_valid() {
        assert!(validate_config_value("backend", "system").is_ok());
        assert!(validate_config_value("backend", "notify-send").is_ok());
        assert!(validate_config_value("backend", "NONE").is_ok());
    }

    #[test]
    fn validate_backend_invalid() {
        assert!(validate_config_value("backend", "growl").is_err());
    }

    #[test]
    fn validate_sound_valid() {
        assert!(validate_config_value("sound", "bing").is_ok());
        assert!(validate_config_value("sound", "upstairs").is_ok());
    }

    #[test]
    fn validate_sound_invalid() {
        assert!(validate_config_value("sound", "klaxon").is_err());
    }

    #[test]
    fn validate_free_text_keys() {
        assert!(validate_config_value("app_name", "Parley Beta").is_ok());
        assert!(validate_config_value("icon", "/any/path.svg").is_ok());
    }
}
