// SPDX-License-Identifier: MPL-2.0
use gallery_lens::config::{self, Config, DiscoveryMode};
use gallery_lens::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-load-more"), "Load more photos");

    // 2. Change config to fr
    let mut french_config = loaded_initial_config.clone();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-load-more"), "Charger plus de photos");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_hand_written_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[scan]
base_path = "http://localhost:8000/photos"
extensions = ["webp", "jpg"]
miss_threshold = 5
discovery = "manifest"

[gallery]
page_size = 9

[[folders]]
name = "sport"
display_name = "Sport"
search_name = "Sport"
category = "sport"
"#,
    )
    .expect("Failed to write settings file");

    let config = config::load_from_path(&path).expect("Failed to load settings file");

    assert_eq!(config.scan.discovery, DiscoveryMode::Manifest);
    assert_eq!(config.scan.extensions, ["webp", "jpg"]);
    assert_eq!(config.miss_threshold().value(), 5);
    assert_eq!(config.page_size().value(), 9);
    let folders = config.folder_specs();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].search_prefix, "Sport");
    // Unset sections keep their defaults.
    assert_eq!(config.gallery.container_id, "photoGallery");
}

#[test]
fn test_corrupt_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "scan = [not toml")
        .expect("Failed to write settings file");

    let (config, warning) = config::load(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
