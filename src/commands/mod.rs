pub mod config;
pub mod doctor;
pub mod open;

use std::path::PathBuf;

use clap::Args;
use other_editor::editor::{detect_host, other_of, Host, HostSignals, TargetEditor};

/// Options shared by every command that talks about the host editor.
#[derive(Args, Debug, Clone)]
pub struct HostArgs {
    /// Editor to open in, instead of "whichever one this isn't"
    #[arg(long, value_enum)]
    pub to: Option<TargetEditor>,

    /// Application name reported by the host editor
    #[arg(long, env = "OTHER_EDITOR_HOST_APP")]
    pub host_app: Option<String>,

    /// URI scheme reported by the host editor
    #[arg(long, env = "OTHER_EDITOR_HOST_SCHEME")]
    pub host_scheme: Option<String>,
}

impl HostArgs {
    pub fn host(&self) -> Host {
        detect_host(&HostSignals {
            app_name: self.host_app.clone(),
            uri_scheme: self.host_scheme.clone(),
        })
    }

    pub fn target(&self) -> TargetEditor {
        self.to.unwrap_or_else(|| other_of(self.host()))
    }
}

/// Workspace folders open in the host editor, plus dry-run.
#[derive(Args, Debug, Clone)]
pub struct WorkspaceArgs {
    /// Open workspace folder; repeat for multi-root workspaces
    #[arg(long = "workspace-root", value_name = "DIR")]
    pub workspace_roots: Vec<PathBuf>,

    /// Print the commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}
