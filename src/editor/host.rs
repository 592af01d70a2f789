use super::TargetEditor;

/// Which editor the current process runs inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// Identified as one of the supported editors.
    Editor(TargetEditor),
    /// Neither signal matched.
    Unknown,
}

/// Raw identification exposed by the running host editor.
#[derive(Debug, Clone, Default)]
pub struct HostSignals {
    /// Human-readable application name, e.g. `"Visual Studio Code"`.
    pub app_name: Option<String>,
    /// URI scheme the host registers, e.g. `"cursor"`.
    pub uri_scheme: Option<String>,
}

// Cursor is checked first: its builds report VS Code-like identifiers in places.
const APP_NAME_MARKERS: &[(TargetEditor, &[&str])] = &[
    (TargetEditor::Cursor, &["cursor"]),
    (TargetEditor::VsCode, &["visual studio code", "vs code", "vscode", "code - oss"]),
];

const SCHEME_PREFIXES: &[(TargetEditor, &str)] = &[
    (TargetEditor::Cursor, "cursor"),
    (TargetEditor::VsCode, "vscode"),
    (TargetEditor::VsCode, "code-oss"),
];

/// Classify the host from its app name and URI scheme.
///
/// The app name wins when both signals are present.
pub fn detect_host(signals: &HostSignals) -> Host {
    if let Some(name) = signals.app_name.as_deref() {
        let name = name.to_lowercase();
        for &(editor, markers) in APP_NAME_MARKERS {
            if markers.iter().any(|m| name.contains(m)) {
                return Host::Editor(editor);
            }
        }
    }
    if let Some(scheme) = signals.uri_scheme.as_deref() {
        let scheme = scheme.to_lowercase();
        for &(editor, prefix) in SCHEME_PREFIXES {
            if scheme.starts_with(prefix) {
                return Host::Editor(editor);
            }
        }
    }
    Host::Unknown
}

/// The editor to hop to from `host`. An unknown host targets VS Code.
pub const fn other_of(host: Host) -> TargetEditor {
    match host {
        Host::Editor(TargetEditor::VsCode) => TargetEditor::Cursor,
        Host::Editor(TargetEditor::Cursor) | Host::Unknown => TargetEditor::VsCode,
    }
}
