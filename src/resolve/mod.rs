//! Build the concrete command that opens a file or project in the target
//! editor. One submodule per platform family; each is a pure function of its
//! inputs and the existence oracle.

mod macos;
mod posix;
mod windows;


use std::path::Path;

use tracing::debug;

use crate::editor::TargetEditor;
use crate::location::EditorLocation;
use crate::platform::{ExistenceOracle, Platform};

/// What to run to get the target editor to open something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedInvocation {
    /// Run `command` directly with `args`.
    Exec {
        /// Program name or path.
        command: String,
        /// Arguments, in order.
        args: Vec<String>,
    },
    /// Hand `target` (a URL or path) to the OS opener.
    OpenViaOsHandler {
        /// URL, bundle path or file to open.
        target: String,
        /// Application name or bundle to open it with, if pinned.
        application: Option<String>,
    },
}

impl ResolvedInvocation {
    /// Program and arguments to spawn for this invocation on `platform`.
    pub fn command_line(&self, platform: &Platform) -> (String, Vec<String>) {
        match self {
            Self::Exec { command, args } => (command.clone(), args.clone()),
            Self::OpenViaOsHandler {
                target,
                application,
            } => platform.os_opener(target, application.as_deref()),
        }
    }
}

impl std::fmt::Display for ResolvedInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exec { command, args } => {
                write!(f, "{}", quote(command))?;
                for arg in args {
                    write!(f, " {}", quote(arg))?;
                }
                Ok(())
            }
            Self::OpenViaOsHandler {
                target,
                application,
            } => {
                f.write_str("os-open")?;
                if let Some(app) = application {
                    write!(f, " -a {}", quote(app))?;
                }
                write!(f, " {}", quote(target))
            }
        }
    }
}

fn quote(s: &str) -> String {
    if s.contains(char::is_whitespace) {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}

/// What is being opened.
#[derive(Debug, Clone, Copy)]
pub(crate) enum OpenTarget<'a> {
    File(&'a EditorLocation),
    Project(&'a Path),
}

impl OpenTarget<'_> {
    /// Arguments for CLI-style launches: `--goto` for files, the bare path for projects.
    fn cli_args(self) -> Vec<String> {
        match self {
            Self::File(loc) => vec!["--goto".to_string(), loc.goto_arg()],
            Self::Project(path) => vec![path.display().to_string()],
        }
    }
}

/// Invocation that opens `location` in `editor`.
///
/// `configured` is the user's path setting for `editor`; `None` and the
/// empty string both mean "not configured".
pub fn resolve_open_file(
    editor: TargetEditor,
    location: &EditorLocation,
    configured: Option<&str>,
    platform: &Platform,
    fs: &dyn ExistenceOracle,
) -> ResolvedInvocation {
    resolve(editor, OpenTarget::File(location), configured, platform, fs)
}

/// Invocation that opens the folder `project` in `editor`.
pub fn resolve_open_project(
    editor: TargetEditor,
    project: &Path,
    configured: Option<&str>,
    platform: &Platform,
    fs: &dyn ExistenceOracle,
) -> ResolvedInvocation {
    resolve(editor, OpenTarget::Project(project), configured, platform, fs)
}

fn resolve(
    editor: TargetEditor,
    target: OpenTarget<'_>,
    configured: Option<&str>,
    platform: &Platform,
    fs: &dyn ExistenceOracle,
) -> ResolvedInvocation {
    let configured = configured.map(str::trim).unwrap_or_default();
    let invocation = match platform {
        Platform::MacOs { home } => macos::resolve(editor, target, configured, home, fs),
        Platform::Windows { .. } => windows::resolve(editor, target, configured, platform, fs),
        Platform::Posix => posix::resolve(editor, target, configured),
    };
    debug!(%editor, platform = platform.label(), %invocation, "resolved");
    invocation
}
