//! Config store integration tests

use tempfile::TempDir;

use parley_notify::application::ports::ConfigStore;
use parley_notify::domain::config::AppConfig;
use parley_notify::domain::error::ConfigError;
use parley_notify::infrastructure::XdgConfigStore;

fn store_in(dir: &TempDir) -> XdgConfigStore {
    XdgConfigStore::with_path(dir.path().join("config.toml"))
}

#[tokio::test]
async fn load_missing_file_returns_empty_config() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let config = store.load().await.unwrap();
    assert!(config.app_name.is_none());
    assert!(config.backend.is_none());
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let config = AppConfig {
        app_name: Some("Parley Beta".to_string()),
        timeout: Some(5),
        priority_app: Some(true),
        sound: Some("ripple".to_string()),
        ..Default::default()
    };

    store.save(&config).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded.app_name, Some("Parley Beta".to_string()));
    assert_eq!(loaded.timeout, Some(5));
    assert_eq!(loaded.priority_app, Some(true));
    assert_eq!(loaded.sound, Some("ripple".to_string()));
}

#[tokio::test]
async fn save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = XdgConfigStore::with_path(dir.path().join("nested/deeper/config.toml"));

    store.save(&AppConfig::defaults()).await.unwrap();
    assert!(store.exists());
}

#[tokio::test]
async fn init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.init().await.unwrap();
    let config = store.load().await.unwrap();
    assert_eq!(config.app_id, Some("Parley.Desktop".to_string()));

    let err = store.init().await.unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists(_)));
}

#[tokio::test]
async fn load_rejects_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    tokio::fs::write(&path, "timeout = \"not a number").await.unwrap();

    let store = XdgConfigStore::with_path(path);
    let err = store.load().await.unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}
