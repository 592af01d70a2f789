use super::*;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.configured_path(TargetEditor::Cursor), None);
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.set_value("vscode.path", "/usr/local/bin/code").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.configured_path(TargetEditor::VsCode), Some("/usr/local/bin/code"));
    assert_eq!(loaded.configured_path(TargetEditor::Cursor), None);
}

#[test]
fn test_parses_hand_written_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let toml = "[cursor]\npath = \"Cursor Nightly\"\n\n[vscode]\npath = \"  \"\n";
    std::fs::write(&path, toml).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.configured_path(TargetEditor::Cursor), Some("Cursor Nightly"));
    assert_eq!(config.configured_path(TargetEditor::VsCode), None);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[cursor\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config"));
}

#[test]
fn test_get_set_values() {
    let mut config = Config::default();
    config.set_value("cursor.path", "cursor").unwrap();
    assert_eq!(config.get_value("cursor.path").unwrap(), "cursor");

    config.set_value("cursor.path", "").unwrap();
    assert_eq!(config.get_value("cursor.path").unwrap(), "");
    assert!(config.cursor.path.is_none());

    assert!(config.set_value("zed.path", "zed").is_err());
    assert!(config.get_value("editor.command").is_err());
}

#[test]
fn test_unknown_key_lists_valid_keys() {
    let err = Config::default().get_value("editor.command").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown config key: editor.command (expected one of: cursor.path, vscode.path)"
    );
}

#[test]
fn test_entries_cover_both_editors() {
    let mut config = Config::default();
    config.set_value("vscode.path", "code-insiders").unwrap();
    let entries: Vec<_> = config.entries().collect();
    assert_eq!(
        entries,
        [
            (TargetEditor::Cursor, None),
            (TargetEditor::VsCode, Some("code-insiders")),
        ]
    );
    assert_eq!(Config::keys().collect::<Vec<_>>(), ["cursor.path", "vscode.path"]);
}
