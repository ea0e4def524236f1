use serial_test::serial;
use std::env;
use std::fs;
use toolify_web::config::AppConfig;
use toolify_web::ui::Theme;

const BIN: &str = "toolify-web";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        for var in [
            "TOOLIFY_SERVER__PORT",
            "TOOLIFY_UI__DEFAULT_THEME",
            "CONFIG_FILE",
            "PORT",
            "HOST",
            "STATIC_DIR",
            "DEFAULT_THEME",
            "LOG_JSON",
        ] {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.ui.default_theme, Theme::Dark);
    assert!(!config.logging.json);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("TOOLIFY_SERVER__PORT", "9090");
        env::set_var("TOOLIFY_UI__DEFAULT_THEME", "light");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.ui.default_theme, Theme::Light);

    clear_env_vars();
}

#[test]
#[serial]
fn test_theme_accepts_same_spellings_from_every_source() {
    clear_env_vars();
    unsafe {
        env::set_var("TOOLIFY_UI__DEFAULT_THEME", "Light");
    }
    let config = AppConfig::load_from_args([BIN]).expect("env theme should parse");
    assert_eq!(config.ui.default_theme, Theme::Light);
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN, "--theme", "Light"]).expect("flag theme should parse");
    assert_eq!(config.ui.default_theme, Theme::Light);

    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("toolify.yaml");
    fs::write(&file_path, "ui:\n  default_theme: LIGHT\n").expect("Failed to write temp config");
    let path = file_path.to_str().expect("utf-8 path");
    let config = AppConfig::load_from_args([BIN, "--config", path]).expect("file theme should parse");
    assert_eq!(config.ui.default_theme, Theme::Light);

    unsafe {
        env::set_var("TOOLIFY_UI__DEFAULT_THEME", "sepia");
    }
    assert!(AppConfig::load_from_args([BIN]).is_err());
    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("TOOLIFY_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([BIN, "--port", "4040", "--theme", "light"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 4040);
    assert_eq!(config.ui.default_theme, Theme::Light);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("toolify.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
ui:
  default_theme: light
"#,
    )
    .expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.ui.default_theme, Theme::Light);
    // Keys missing from the file keep their defaults.
    assert_eq!(config.server.host, "0.0.0.0");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let result = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(result.expect("Failed to load config").server.port, 6060);
}
