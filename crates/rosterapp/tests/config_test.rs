use rosterapp::config::{RosterConfig, CONFIG_FILENAME};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = RosterConfig::load(dir.path()).unwrap();
    assert_eq!(config, RosterConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILENAME),
        "storage_key = \"angkatan_2024\"\nseed_sample_data = false\n",
    )
    .unwrap();

    let config = RosterConfig::load(dir.path()).unwrap();
    assert_eq!(config.storage_key, "angkatan_2024");
    assert!(!config.seed_sample_data);
    assert_eq!(config.export_filename, "mahasiswa.json");
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILENAME), "storage_key = [").unwrap();
    assert!(RosterConfig::load(dir.path()).is_err());
}
