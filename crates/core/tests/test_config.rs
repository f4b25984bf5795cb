//! Tests for configuration parsing

use std::fs;
use swiftdecl_core::config::CONFIG_FILE_NAME;
use swiftdecl_core::{DeclarationKind, ExtractConfig, Selector};
use tempfile::TempDir;

#[test]
fn test_default_config_selects_everything() {
    let config = ExtractConfig::default();
    assert!(config.extract.kinds.is_empty());
    assert_eq!(config.selector().unwrap(), Selector::Any);
}

#[test]
fn test_single_kind() {
    let config = ExtractConfig::from_toml_str(
        r#"
[extract]
kinds = ["enum"]
"#,
    )
    .unwrap();

    assert_eq!(
        config.selector().unwrap(),
        Selector::Kind(DeclarationKind::Enumeration)
    );
}

#[test]
fn test_several_kinds_accept_aliases() {
    let config = ExtractConfig::from_toml_str(
        r#"
[extract]
kinds = ["case", "struct", "Structure", "func"]
"#,
    )
    .unwrap();

    assert_eq!(
        config.selector().unwrap(),
        Selector::AnyOf(vec![
            DeclarationKind::Case,
            DeclarationKind::Function,
            DeclarationKind::Structure,
        ])
    );
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result = ExtractConfig::from_toml_str(
        r#"
[extract]
kinds = ["module"]
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_missing_section_uses_defaults() {
    let config = ExtractConfig::from_toml_str("").unwrap();
    assert_eq!(config, ExtractConfig::default());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    let mut config = ExtractConfig::default();
    config.extract.kinds = vec!["protocol".to_string(), "associatedtype".to_string()];
    config.save(&path).unwrap();

    let loaded = ExtractConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_find_and_load_walks_up() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[extract]\nkinds = [\"import\"]\n",
    )
    .unwrap();

    let nested = dir.path().join("Sources").join("App");
    fs::create_dir_all(&nested).unwrap();

    let config = ExtractConfig::find_and_load(&nested).unwrap();
    assert_eq!(
        config.selector().unwrap(),
        Selector::Kind(DeclarationKind::Import)
    );
}

#[test]
fn test_kind_spellings_round_trip() {
    for kind in DeclarationKind::ALL {
        let parsed: DeclarationKind = kind.to_string().parse().unwrap();
        assert_eq!(parsed, kind);
    }
}
