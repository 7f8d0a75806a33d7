//! Integration tests for configuration loading.
//!
//! Exercise the full YAML path: global file, project-local overrides, the
//! string-or-mapping standard shape, and the snapshot semantics the rest of
//! the pipeline relies on.

use camino::Utf8PathBuf;
use phpfix::{ConfigManager, FixerConfig, Standard, wants_fix_on_save};
use std::fs;
use tempfile::TempDir;

fn utf8_dir(temp_dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap()
}

#[test]
fn test_full_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let dir = utf8_dir(&temp_dir);
    let path = dir.join("phpfix.yaml");

    fs::write(
        &path,
        r#"
interpreter_path: /usr/bin/php
fixer_path: /usr/local/bin/phpcbf
standard:
  shop: PSR2
  blog: Squiz
  _default: PSR12
additional_args: ["-n"]
fix_on_save: true
"#,
    )
    .unwrap();

    let config = ConfigManager::new(&path).load().unwrap();
    assert_eq!(config.interpreter_path.as_deref(), Some("/usr/bin/php"));
    assert_eq!(config.fixer_path, "/usr/local/bin/phpcbf");
    assert_eq!(config.additional_args, vec!["-n"]);
    assert!(config.fix_on_save);

    match config.standard.unwrap() {
        Standard::PerFolder { folders, default } => {
            assert_eq!(folders.get("shop"), Some(&"PSR2".to_string()));
            assert_eq!(default, Some("PSR12".to_string()));
        }
        other => panic!("expected per-folder standard, got {other:?}"),
    }
}

#[test]
fn test_string_standard_parses_as_fixed() {
    let temp_dir = TempDir::new().unwrap();
    let dir = utf8_dir(&temp_dir);
    let path = dir.join("phpfix.yaml");
    fs::write(&path, "standard: PSR12\n").unwrap();

    let config = ConfigManager::new(&path).load().unwrap();
    assert_eq!(config.standard, Some(Standard::Fixed("PSR12".to_string())));
}

#[test]
fn test_project_file_overrides_only_its_own_keys() {
    let temp_dir = TempDir::new().unwrap();
    let dir = utf8_dir(&temp_dir);
    let global = dir.join("phpfix.yaml");
    fs::write(
        &global,
        "fixer_path: /opt/phpcbf\nstandard: PSR12\nfix_on_save: true\n",
    )
    .unwrap();

    let project = dir.join("blog");
    fs::create_dir(&project).unwrap();
    fs::write(
        project.join(".phpfix.yaml"),
        "standard: Squiz\nadditional_args: [\"--tab-width=4\"]\n",
    )
    .unwrap();

    let config = ConfigManager::new(&global)
        .load_for_project(std::slice::from_ref(&project))
        .unwrap();

    assert_eq!(config.standard, Some(Standard::Fixed("Squiz".to_string())));
    assert_eq!(config.additional_args, vec!["--tab-width=4"]);
    // Untouched keys come from the global file
    assert_eq!(config.fixer_path, "/opt/phpcbf");
    assert!(config.fix_on_save);
}

#[test]
fn test_folders_without_project_file_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let dir = utf8_dir(&temp_dir);
    let global = dir.join("phpfix.yaml");
    fs::write(&global, "standard: PSR12\n").unwrap();

    let bare = dir.join("bare");
    let configured = dir.join("configured");
    fs::create_dir(&bare).unwrap();
    fs::create_dir(&configured).unwrap();
    fs::write(configured.join(".phpfix.yaml"), "standard: PSR2\n").unwrap();

    let config = ConfigManager::new(&global)
        .load_for_project(&[bare, configured])
        .unwrap();
    assert_eq!(config.standard, Some(Standard::Fixed("PSR2".to_string())));
}

#[test]
fn test_reload_produces_a_fresh_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let dir = utf8_dir(&temp_dir);
    let path = dir.join("phpfix.yaml");
    fs::write(&path, "fix_on_save: false\n").unwrap();

    let manager = ConfigManager::new(&path);
    let before = manager.load().unwrap();

    fs::write(&path, "fix_on_save: true\n").unwrap();
    let after = manager.load().unwrap();

    // The earlier snapshot is untouched; reload never mutates in place.
    assert!(!before.fix_on_save);
    assert!(after.fix_on_save);
}

#[test]
fn test_malformed_yaml_is_an_error_not_a_panic() {
    let temp_dir = TempDir::new().unwrap();
    let dir = utf8_dir(&temp_dir);
    let path = dir.join("phpfix.yaml");
    fs::write(&path, "standard: [unclosed\n").unwrap();

    assert!(ConfigManager::new(&path).load().is_err());
}

#[test]
fn test_loaded_config_drives_the_save_hook() {
    let config = FixerConfig {
        fix_on_save: true,
        ..FixerConfig::default()
    };

    assert!(wants_fix_on_save("index.php", &config));
    assert!(!wants_fix_on_save(".env.php", &config));
}
