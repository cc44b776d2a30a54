use calorie_core::config::{Config, ConfigManager};
use tempfile::TempDir;

#[test]
fn save_then_load_preserves_settings() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path().join("nested"));
    let config = Config {
        color_output: false,
        unit_label: "kcal".into(),
        empty_message: "Nothing logged yet".into(),
        log_filter: Some("calorie_core=debug".into()),
    };
    manager.save(&config).unwrap();
    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());
    assert_eq!(manager.load().unwrap(), config);
}

#[test]
fn corrupt_file_surfaces_serde_error() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path());
    std::fs::write(manager.path(), "{ not json").unwrap();
    let err = manager.load().unwrap_err();
    assert!(err.to_string().starts_with("Serialization error"));
}
