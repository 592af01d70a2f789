use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ExistenceOracle, Platform};
use crate::editor::{Channel, TargetEditor};

/// Helper names looked for under `Contents/Resources/app/bin` of a bundle.
const BUNDLED_CLI_NAMES: &[&str] = &["cursor", "code", "code-insiders"];

/// Windows install folder and executable for each editor.
const fn windows_layout(editor: TargetEditor) -> (&'static str, &'static str) {
    match editor {
        TargetEditor::Cursor => ("cursor", "Cursor.exe"),
        TargetEditor::VsCode => ("Microsoft VS Code", "Code.exe"),
    }
}

/// `/Applications/<name>.app` followed by `~/Applications/<name>.app`.
pub fn app_bundle_candidates(home: &Path, app_name: &str) -> Vec<PathBuf> {
    let bundle = format!("{app_name}.app");
    vec![
        Path::new("/Applications").join(&bundle),
        home.join("Applications").join(&bundle),
    ]
}

/// Ordered install locations for `editor` on `platform`.
///
/// macOS lists every channel's bundles, stable first. Windows lists the
/// per-user install, then the 64-bit and 32-bit program-file roots. Other
/// platforms have no list: the command is left to `PATH` lookup.
pub fn install_candidates(editor: TargetEditor, platform: &Platform) -> Vec<PathBuf> {
    match platform {
        Platform::MacOs { home } => editor
            .channels()
            .iter()
            .flat_map(|&channel| app_bundle_candidates(home, editor.app_name(channel)))
            .collect(),
        Platform::Windows {
            local_app_data,
            program_files,
            program_files_x86,
        } => {
            let (folder, exe) = windows_layout(editor);
            let mut out = Vec::new();
            if let Some(root) = local_app_data {
                out.push(PathBuf::from(format!("{root}\\Programs\\{folder}\\{exe}")));
            }
            for root in [program_files, program_files_x86].into_iter().flatten() {
                out.push(PathBuf::from(format!("{root}\\{folder}\\{exe}")));
            }
            out
        }
        Platform::Posix => Vec::new(),
    }
}

/// First candidate that exists, in declaration order.
pub fn find_installed(candidates: &[PathBuf], fs: &dyn ExistenceOracle) -> Option<PathBuf> {
    let found = candidates.iter().find(|p| fs.exists(p)).cloned();
    debug!(?found, probed = candidates.len(), "install probe");
    found
}

/// Command-line helper bundled inside a macOS `.app`, if present.
pub fn find_cli_inside_app(app: &Path, fs: &dyn ExistenceOracle) -> Option<PathBuf> {
    let bin = app.join("Contents").join("Resources").join("app").join("bin");
    BUNDLED_CLI_NAMES
        .iter()
        .map(|name| bin.join(name))
        .find(|p| fs.exists(p))
}

/// Channel of the first installed bundle, or `None` when nothing is found.
pub(crate) fn installed_channel(
    editor: TargetEditor,
    home: &Path,
    fs: &dyn ExistenceOracle,
) -> Option<(Channel, PathBuf)> {
    editor.channels().iter().find_map(|&channel| {
        let candidates = app_bundle_candidates(home, editor.app_name(channel));
        find_installed(&candidates, fs).map(|path| (channel, path))
    })
}
