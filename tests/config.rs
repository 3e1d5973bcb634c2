use academic_planner::config::Config;
use academic_planner::constants::{DEFAULT_MAX_ATTACHMENT_BYTES, STORAGE_KEY};
use academic_planner::entities::{Category, View};
use academic_planner::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_view, "dashboard");
    assert_eq!(config.storage.key, STORAGE_KEY);
    assert_eq!(config.attachments.max_size_bytes, DEFAULT_MAX_ATTACHMENT_BYTES);
    assert_eq!(config.attachments.max_size_bytes, 5 * 1024 * 1024);
    assert_eq!(config.display.date_format, datetime::DATE_FORMAT);
    assert!(!config.logging.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 5;
    assert!(config.validate().is_err());
    config = Config::default();

    config.ui.default_view = "calendar".to_string();
    assert!(config.validate().is_err());
    config = Config::default();

    config.storage.key = "  ".to_string();
    assert!(config.validate().is_err());
    config.storage.key = "planner/state".to_string();
    assert!(config.validate().is_err());
    config = Config::default();

    config.attachments.max_size_bytes = 0;
    assert!(config.validate().is_err());
    config.attachments.max_size_bytes = u64::MAX;
    assert!(config.validate().is_err());
    config = Config::default();

    config.display.date_format = "%Y-%".to_string();
    assert!(config.validate().is_err());
    config = Config::default();

    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_initial_view() {
    let mut config = Config::default();
    assert_eq!(config.ui.initial_view(), View::Dashboard);

    config.ui.default_view = "books".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.ui.initial_view(), View::Category(Category::Books));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 30

[attachments]
max_size_bytes = 1048576

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.sidebar_width, 30);
    assert_eq!(config.attachments.max_size_bytes, 1024 * 1024);
    assert!(config.logging.enabled);

    assert_eq!(config.ui.default_view, "dashboard");
    assert_eq!(config.storage.key, STORAGE_KEY);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.display.time_format, datetime::TIME_FORMAT);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_view, default_config.ui.default_view);
    assert_eq!(config.ui.sidebar_width, default_config.ui.sidebar_width);
    assert_eq!(config.storage.key, default_config.storage.key);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_and_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Academic Planner Configuration File"));
    assert!(content.contains("default_view = \"dashboard\""));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.storage.key, STORAGE_KEY);
}

#[test]
fn test_load_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\nsidebar_width = 500\n").unwrap();
    assert!(Config::load_from_file(&path).is_err());

    std::fs::write(&path, "not = [valid").unwrap();
    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_data_dir_override() {
    let mut config = Config::default();
    config.storage.data_dir = Some("/tmp/planner-data".into());
    assert_eq!(config.data_dir().unwrap(), std::path::PathBuf::from("/tmp/planner-data"));
}
