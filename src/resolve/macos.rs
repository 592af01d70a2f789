use std::path::{Path, PathBuf};

use super::{OpenTarget, ResolvedInvocation};
use crate::editor::{Channel, TargetEditor};
use crate::platform::{
    app_bundle_candidates, find_cli_inside_app, find_installed, installed_channel,
    ExistenceOracle,
};

/// How the editor gets launched once the configuration is interpreted.
#[derive(Debug, PartialEq, Eq)]
enum Launcher {
    /// A command-line helper that understands `--goto`.
    Cli(String),
    /// An application (name or bundle path) reached through `open`.
    App(String),
}

pub(super) fn resolve(
    editor: TargetEditor,
    target: OpenTarget<'_>,
    configured: &str,
    home: &Path,
    fs: &dyn ExistenceOracle,
) -> ResolvedInvocation {
    match launcher(editor, configured, home, fs) {
        Launcher::Cli(command) => ResolvedInvocation::Exec {
            command,
            args: target.cli_args(),
        },
        Launcher::App(app) => {
            let scheme = editor.url_scheme(channel(editor, configured, home, fs));
            ResolvedInvocation::OpenViaOsHandler {
                target: editor_url(scheme, target),
                application: Some(app),
            }
        }
    }
}

/// Interpret the configured string, first match wins:
/// empty, `.app` bundle, path, known shim name, application display name.
fn launcher(
    editor: TargetEditor,
    configured: &str,
    home: &Path,
    fs: &dyn ExistenceOracle,
) -> Launcher {
    if configured.is_empty() {
        return match installed_channel(editor, home, fs) {
            Some((channel, bundle)) => bundle_launcher(&bundle, fs)
                .unwrap_or_else(|| Launcher::App(editor.app_name(channel).to_string())),
            None => Launcher::App(editor.app_name(Channel::Stable).to_string()),
        };
    }

    let bundle = configured.trim_end_matches('/');
    if bundle.ends_with(".app") {
        let bundle = PathBuf::from(bundle);
        return bundle_launcher(&bundle, fs)
            .unwrap_or_else(|| Launcher::App(bundle.display().to_string()));
    }

    if configured.contains('/') || editor.shim_names().contains(&configured) {
        return Launcher::Cli(configured.to_string());
    }

    let candidates = app_bundle_candidates(home, configured);
    match find_installed(&candidates, fs) {
        Some(bundle) => bundle_launcher(&bundle, fs)
            .unwrap_or_else(|| Launcher::App(bundle.display().to_string())),
        None => Launcher::App(configured.to_string()),
    }
}

fn bundle_launcher(bundle: &Path, fs: &dyn ExistenceOracle) -> Option<Launcher> {
    find_cli_inside_app(bundle, fs).map(|cli| Launcher::Cli(cli.display().to_string()))
}

/// An `insiders` hint in the configuration picks the Insiders scheme;
/// otherwise the first installed channel, defaulting to stable.
fn channel(
    editor: TargetEditor,
    configured: &str,
    home: &Path,
    fs: &dyn ExistenceOracle,
) -> Channel {
    if editor.channels().contains(&Channel::Insiders)
        && configured.to_lowercase().contains("insiders")
    {
        return Channel::Insiders;
    }
    installed_channel(editor, home, fs).map_or(Channel::Stable, |(channel, _)| channel)
}

/// `<scheme>://file<encoded path>`, with `:<line>:<column>` for files and a
/// trailing `/` for folders.
pub(super) fn editor_url(scheme: &str, target: OpenTarget<'_>) -> String {
    match target {
        OpenTarget::File(loc) => format!(
            "{scheme}://file{}:{}:{}",
            encode_path(&loc.file_path.display().to_string()),
            loc.line,
            loc.column
        ),
        OpenTarget::Project(path) => {
            let mut encoded = encode_path(&path.display().to_string());
            if !encoded.ends_with('/') {
                encoded.push('/');
            }
            format!("{scheme}://file{encoded}")
        }
    }
}

/// Percent-encode each segment, keeping the `/` separators.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_keeps_separators() {
        assert_eq!(
            encode_path("/Users/x/my proj/#1?.rs"),
            "/Users/x/my%20proj/%231%3F.rs"
        );
    }

    #[test]
    fn test_project_url_has_trailing_slash() {
        let url = editor_url("cursor", OpenTarget::Project(Path::new("/Users/x/proj")));
        assert_eq!(url, "cursor://file/Users/x/proj/");
        let url = editor_url("cursor", OpenTarget::Project(Path::new("/Users/x/proj/")));
        assert_eq!(url, "cursor://file/Users/x/proj/");
    }

    #[test]
    fn test_shim_name_is_used_as_cli() {
        let fs = crate::platform::FixedFs::default();
        assert_eq!(
            launcher(TargetEditor::VsCode, "code-insiders", Path::new("/Users/x"), &fs),
            Launcher::Cli("code-insiders".into())
        );
    }
}
