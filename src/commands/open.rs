use anyhow::{anyhow, Context, Result};
use clap::Args;
use other_editor::{
    hop::{FileRequest, Hop, Launcher, SystemLauncher},
    location::{ActiveDocument, Cursor},
    Config, Platform, ProcessError, RealFs,
};
use tracing::info;

use super::{HostArgs, WorkspaceArgs};

#[derive(Args, Debug)]
pub struct FileArgs {
    /// File or folder to open: a path or a file:// URI (defaults to --active)
    #[arg(value_name = "REF")]
    pub reference: Option<String>,

    /// Document currently focused in the host editor
    #[arg(long, value_name = "REF")]
    pub active: Option<String>,

    /// 1-based cursor line in the active document
    #[arg(long, requires = "active")]
    pub line: Option<u32>,

    /// 1-based cursor column in the active document
    #[arg(long, requires = "line")]
    pub column: Option<u32>,

    #[command(flatten)]
    pub host: HostArgs,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub host: HostArgs,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

/// Prints what would run.
struct DryRun;

impl Launcher for DryRun {
    fn launch(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            if arg.contains(char::is_whitespace) {
                line.push_str(&format!("\"{arg}\""));
            } else {
                line.push_str(arg);
            }
        }
        println!("{line}");
        Ok(())
    }
}

fn run(
    host: &HostArgs,
    dry_run: bool,
    action: impl FnOnce(&Hop<'_>) -> Result<(), other_editor::OpenError>,
) -> Result<()> {
    let target = host.target();
    // Read fresh every time so settings edits apply without a restart.
    let config = Config::load()?;
    let platform = Platform::current();
    let launcher: &dyn Launcher = if dry_run { &DryRun } else { &SystemLauncher };
    let hop = Hop {
        target,
        configured: config.configured_path(target).map(str::to_string),
        platform: &platform,
        fs: &RealFs,
        launcher,
        cwd: std::env::current_dir().context("Could not determine current directory")?,
    };
    info!(host = ?host.host(), %target, platform = platform.label(), "opening");
    action(&hop).map_err(|e| anyhow!("Failed to open in {target}: {e}"))
}

pub fn cmd_file(args: FileArgs) -> Result<()> {
    let cursor = args
        .line
        .map(|line| Cursor::from_one_based(line, args.column.unwrap_or(1)));
    let request = FileRequest {
        reference: args.reference,
        active: args.active.map(|reference| ActiveDocument { reference, cursor }),
        workspace_roots: args.workspace.workspace_roots,
    };
    run(&args.host, args.workspace.dry_run, |hop| hop.open_file(&request))
}

pub fn cmd_project(args: ProjectArgs) -> Result<()> {
    let roots = args.workspace.workspace_roots;
    run(&args.host, args.workspace.dry_run, |hop| hop.open_project(&roots))
}
