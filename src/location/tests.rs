use super::*;
use crate::platform::FixedFs;

fn cwd() -> PathBuf {
    PathBuf::from("/work")
}

#[test]
fn test_cursor_is_converted_to_one_based() {
    let loc = EditorLocation::new("/p/a.rs".into(), Some(Cursor { row: 2, col: 1 }));
    assert_eq!((loc.line, loc.column), (3, 2));
    assert_eq!(loc.goto_arg(), "/p/a.rs:3:2");
}

#[test]
fn test_missing_cursor_defaults_to_first_position() {
    let loc = EditorLocation::new("/p/a.rs".into(), None);
    assert_eq!((loc.line, loc.column), (1, 1));
}

#[test]
fn test_from_one_based_clamps_zero() {
    assert_eq!(Cursor::from_one_based(0, 0), Cursor { row: 0, col: 0 });
    assert_eq!(Cursor::from_one_based(10, 4), Cursor { row: 9, col: 3 });
}

#[test]
fn test_source_path_accepts_file_uri_and_relative_paths() {
    let fs = FixedFs::default();
    assert_eq!(
        source_path("file:///Users/x/my%20proj/a.txt", &cwd(), &fs).unwrap(),
        PathBuf::from("/Users/x/my proj/a.txt")
    );
    assert_eq!(
        source_path("src/lib.rs", &cwd(), &fs).unwrap(),
        PathBuf::from("/work/src/lib.rs")
    );
    assert_eq!(
        source_path("/abs/x.rs", &cwd(), &fs).unwrap(),
        PathBuf::from("/abs/x.rs")
    );
}

#[test]
fn test_source_path_rejects_other_schemes() {
    let fs = FixedFs::default();
    let err = source_path("untitled:Untitled-1", &cwd(), &fs).unwrap_err();
    assert!(matches!(err, OpenError::UnsupportedSource(_)));
    let remote = "vscode-remote://ssh-remote+box/home/a.rs";
    let err = source_path(remote, &cwd(), &fs).unwrap_err();
    assert!(matches!(err, OpenError::UnsupportedSource(_)));
}

#[test]
fn test_map_location_uses_active_document_and_cursor() {
    let fs = FixedFs::default();
    let active = ActiveDocument {
        reference: "/p/a.rs".into(),
        cursor: Some(Cursor { row: 4, col: 2 }),
    };
    let loc = map_location(None, Some(&active), &cwd(), &fs).unwrap();
    assert_eq!(loc.goto_arg(), "/p/a.rs:5:3");
}

#[test]
fn test_map_location_explicit_other_file_drops_cursor() {
    let fs = FixedFs::default();
    let active = ActiveDocument {
        reference: "/p/a.rs".into(),
        cursor: Some(Cursor { row: 4, col: 2 }),
    };
    let loc = map_location(Some("/p/b.rs"), Some(&active), &cwd(), &fs).unwrap();
    assert_eq!(loc.goto_arg(), "/p/b.rs:1:1");

    let uri = Some("file:///p/a.rs");
    let loc = map_location(uri, Some(&active), &cwd(), &fs).unwrap();
    assert_eq!(loc.goto_arg(), "/p/a.rs:5:3");
}

#[test]
fn test_map_location_without_anything_fails() {
    let fs = FixedFs::default();
    let err = map_location(None, None, &cwd(), &fs).unwrap_err();
    assert!(matches!(err, OpenError::NoActiveFile));
}

#[test]
fn test_workspace_root_longest_prefix_wins() {
    let roots = vec![
        PathBuf::from("/Users/x"),
        PathBuf::from("/Users/x/proj"),
        PathBuf::from("/Users/x/proj-other"),
    ];
    assert_eq!(
        workspace_root_for(Path::new("/Users/x/proj/src/a.rs"), &roots),
        PathBuf::from("/Users/x/proj")
    );
    assert_eq!(
        workspace_root_for(Path::new("/Users/x/notes.md"), &roots),
        PathBuf::from("/Users/x")
    );
}

#[test]
fn test_workspace_root_falls_back_to_parent() {
    let roots = vec![PathBuf::from("/Users/x/proj")];
    assert_eq!(
        workspace_root_for(Path::new("/tmp/scratch/a.txt"), &roots),
        PathBuf::from("/tmp/scratch")
    );
    assert_eq!(
        workspace_root_for(Path::new("/tmp/a.txt"), &[]),
        PathBuf::from("/tmp")
    );
}

#[test]
fn test_existing_relative_file_with_colon_is_a_path() {
    let fs = FixedFs::new(["/work/notes:v2.md"]);
    assert_eq!(
        source_path("notes:v2.md", &cwd(), &fs).unwrap(),
        PathBuf::from("/work/notes:v2.md")
    );
    let err = source_path("notes:v2.md", &cwd(), &FixedFs::default()).unwrap_err();
    assert!(matches!(err, OpenError::UnsupportedSource(_)));
}
