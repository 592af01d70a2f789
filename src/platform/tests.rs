use super::*;
use crate::editor::TargetEditor;

fn mac() -> Platform {
    Platform::MacOs {
        home: PathBuf::from("/Users/x"),
    }
}

fn windows() -> Platform {
    Platform::Windows {
        local_app_data: Some(r"C:\Users\x\AppData\Local".into()),
        program_files: Some(r"C:\Program Files".into()),
        program_files_x86: Some(r"C:\Program Files (x86)".into()),
    }
}

#[test]
fn test_mac_candidates_stable_before_insiders() {
    let c = install_candidates(TargetEditor::VsCode, &mac());
    assert_eq!(
        c,
        vec![
            PathBuf::from("/Applications/Visual Studio Code.app"),
            PathBuf::from("/Users/x/Applications/Visual Studio Code.app"),
            PathBuf::from("/Applications/Visual Studio Code - Insiders.app"),
            PathBuf::from("/Users/x/Applications/Visual Studio Code - Insiders.app"),
        ]
    );
}

#[test]
fn test_windows_candidates_local_then_program_files() {
    let c = install_candidates(TargetEditor::Cursor, &windows());
    assert_eq!(
        c,
        vec![
            PathBuf::from(r"C:\Users\x\AppData\Local\Programs\cursor\Cursor.exe"),
            PathBuf::from(r"C:\Program Files\cursor\Cursor.exe"),
            PathBuf::from(r"C:\Program Files (x86)\cursor\Cursor.exe"),
        ]
    );
}

#[test]
fn test_windows_candidates_skip_unset_roots() {
    let platform = Platform::Windows {
        local_app_data: None,
        program_files: Some(r"C:\Program Files".into()),
        program_files_x86: None,
    };
    assert_eq!(
        install_candidates(TargetEditor::VsCode, &platform),
        vec![PathBuf::from(r"C:\Program Files\Microsoft VS Code\Code.exe")]
    );
}

#[test]
fn test_posix_has_no_candidates() {
    assert!(install_candidates(TargetEditor::Cursor, &Platform::Posix).is_empty());
}

#[test]
fn test_find_installed_first_match_wins() {
    let c = install_candidates(TargetEditor::VsCode, &mac());
    let fs = FixedFs::new([
        "/Users/x/Applications/Visual Studio Code - Insiders.app",
        "/Users/x/Applications/Visual Studio Code.app",
    ]);
    assert_eq!(
        find_installed(&c, &fs),
        Some(PathBuf::from("/Users/x/Applications/Visual Studio Code.app"))
    );
    assert_eq!(find_installed(&c, &FixedFs::default()), None);
}

#[test]
fn test_find_cli_inside_app() {
    let app = Path::new("/Applications/Cursor.app");
    let fs = FixedFs::new(["/Applications/Cursor.app/Contents/Resources/app/bin/cursor"]);
    assert_eq!(
        find_cli_inside_app(app, &fs),
        Some(PathBuf::from(
            "/Applications/Cursor.app/Contents/Resources/app/bin/cursor"
        ))
    );
    assert_eq!(find_cli_inside_app(app, &FixedFs::default()), None);
}

#[test]
fn test_real_fs_sees_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("Code.exe");
    assert!(!RealFs.exists(&file));
    std::fs::write(&file, b"").unwrap();
    assert!(RealFs.exists(&file));
}

#[test]
fn test_os_opener_per_platform() {
    let (cmd, args) = mac().os_opener("vscode://file/a", Some("Visual Studio Code"));
    assert_eq!(cmd, "open");
    assert_eq!(args, ["-a", "Visual Studio Code", "vscode://file/a"]);

    let (cmd, args) = windows().os_opener("vscode://file/a", Some("ignored"));
    assert_eq!(cmd, "rundll32.exe");
    assert_eq!(args, ["url.dll,FileProtocolHandler", "vscode://file/a"]);

    let (cmd, args) = Platform::Posix.os_opener("vscode://file/a", None);
    assert_eq!(cmd, "xdg-open");
    assert_eq!(args, ["vscode://file/a"]);
}
