//! The two user-facing actions: open the current file, or the current
//! project, in the other editor.


use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::editor::TargetEditor;
use crate::error::{OpenError, ProcessError};
use crate::location::{map_location, source_path, workspace_root_for, ActiveDocument};
use crate::opener;
use crate::platform::{ExistenceOracle, Platform};
use crate::resolve::{resolve_open_file, resolve_open_project, ResolvedInvocation};

/// Something that can start a program.
pub trait Launcher {
    /// Start `program` with `args`.
    fn launch(&self, program: &str, args: &[String]) -> Result<(), ProcessError>;
}

/// Launches real child processes via [`opener::execute`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
        opener::execute(program, args)
    }
}

/// Input for "open file in other editor".
#[derive(Debug, Clone, Default)]
pub struct FileRequest {
    /// File or folder given explicitly; falls back to `active`.
    pub reference: Option<String>,
    /// Document focused in the host editor.
    pub active: Option<ActiveDocument>,
    /// Open workspace folders, in editor order.
    pub workspace_roots: Vec<PathBuf>,
}

/// Everything needed to resolve and launch, built fresh per invocation.
pub struct Hop<'a> {
    /// Editor to open things in.
    pub target: TargetEditor,
    /// User's path setting for `target`.
    pub configured: Option<String>,
    /// Platform the commands are built for.
    pub platform: &'a Platform,
    /// Filesystem checks used while probing.
    pub fs: &'a dyn ExistenceOracle,
    /// Runs the resolved commands.
    pub launcher: &'a dyn Launcher,
    /// Base for relative references.
    pub cwd: PathBuf,
}

impl Hop<'_> {
    /// Open a file at its cursor position. Folders are opened as projects.
    ///
    /// On macOS the containing workspace root is opened first so the file
    /// lands in the right window. That step is best effort: its failure is
    /// logged and the file is opened anyway.
    pub fn open_file(&self, request: &FileRequest) -> Result<(), OpenError> {
        if let Some(reference) = request.reference.as_deref() {
            let path = source_path(reference, &self.cwd, self.fs)?;
            if self.fs.is_dir(&path) {
                info!(path = %path.display(), "reference is a folder, opening as project");
                return self.open_folder(&path);
            }
        }

        let location = map_location(
            request.reference.as_deref(),
            request.active.as_ref(),
            &self.cwd,
            self.fs,
        )?;

        if matches!(self.platform, Platform::MacOs { .. }) {
            let roots = self.absolute_roots(&request.workspace_roots);
            let root = workspace_root_for(&location.file_path, &roots);
            if let Err(e) = self.open_folder(&root) {
                warn!(root = %root.display(), error = %e, "could not open project first");
            }
        }

        let invocation = resolve_open_file(
            self.target,
            &location,
            self.configured.as_deref(),
            self.platform,
            self.fs,
        );
        self.run(&invocation)
    }

    /// Open the first workspace root as a project.
    pub fn open_project(&self, workspace_roots: &[PathBuf]) -> Result<(), OpenError> {
        let root = workspace_roots.first().ok_or(OpenError::NoWorkspace)?;
        self.open_folder(&self.absolute(root))
    }

    /// Roots as given by the caller may be relative to `cwd`.
    fn absolute_roots(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        roots.iter().map(|root| self.absolute(root)).collect()
    }

    /// `path` joined onto `cwd`, with `.` components dropped.
    fn absolute(&self, path: &Path) -> PathBuf {
        self.cwd.join(path).components().collect()
    }

    fn open_folder(&self, folder: &Path) -> Result<(), OpenError> {
        let invocation = resolve_open_project(
            self.target,
            folder,
            self.configured.as_deref(),
            self.platform,
            self.fs,
        );
        self.run(&invocation)
    }

    fn run(&self, invocation: &ResolvedInvocation) -> Result<(), OpenError> {
        let (program, args) = invocation.command_line(self.platform);
        self.launcher.launch(&program, &args)?;
        Ok(())
    }
}
