//! CLI integration tests

use std::process::Command;

use tempfile::TempDir;

/// Binary command with the config and desktop environment sandboxed so
/// tests never touch the real user config or query a real DND setting.
fn parley_notify_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_parley-notify"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env("XDG_CURRENT_DESKTOP", "test-harness")
        .env_remove("PARLEY_NOTIFY_BACKEND");
    cmd
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notification"));
    assert!(stdout.contains("--title"));
    assert!(stdout.contains("--tag"));
    assert!(stdout.contains("--silent"));
    assert!(stdout.contains("--sound"));
    assert!(stdout.contains("--backend"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("parley-notify"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("parley-notify"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_set_get_round_trip() {
    let dir = TempDir::new().unwrap();

    let set = parley_notify_bin(&dir)
        .args(["config", "set", "backend", "none"])
        .output()
        .expect("Failed to execute command");
    assert!(
        set.status.success(),
        "set failed: {}",
        String::from_utf8_lossy(&set.stderr)
    );

    let get = parley_notify_bin(&dir)
        .args(["config", "get", "backend"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "none");
}

#[test]
fn config_set_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .args(["config", "set", "volume", "11"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown key"), "got: {}", stderr);
}

#[test]
fn config_set_rejects_invalid_backend() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .args(["config", "set", "backend", "growl"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Valid options"), "got: {}", stderr);
}

#[test]
fn invalid_tag_error() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .args(["--tag", "general"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid tag"), "got: {}", stderr);
}

#[test]
fn invalid_sound_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .args(["--sound", "klaxon"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "got: {}", stderr);
}

#[test]
fn invalid_backend_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .args(["-b", "growl"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid backend"), "got: {}", stderr);
}

#[test]
fn dnd_reports_inactive_on_unknown_desktop() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .arg("dnd")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "inactive");
}

#[test]
fn send_with_none_backend_runs_full_pipeline() {
    let dir = TempDir::new().unwrap();
    let output = parley_notify_bin(&dir)
        .args(["-t", "Parley", "-m", "hello", "-b", "none"])
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "send failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    // The demo shell loop still receives the flash command
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Window frame flashed"), "got: {}", stderr);
}
