//! `other-editor` command-line entry point.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    config::{cmd_config, ConfigAction},
    doctor::cmd_doctor,
    open::{cmd_file, cmd_project, FileArgs, ProjectArgs},
    HostArgs,
};

#[derive(Parser)]
#[command(
    name = "other-editor",
    version,
    about = "Open the current file or project in the other editor (Cursor / VS Code)"
)]
struct Cli {
    /// Log debug details, including output of launched commands
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a file at the cursor position in the other editor
    File(FileArgs),

    /// Open the first workspace folder in the other editor
    Project(ProjectArgs),

    /// Manage other-editor configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show detected host, installs, and the commands that would run
    Doctor {
        #[command(flatten)]
        host: HostArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    other_editor::logging::init(cli.verbose);

    match cli.command {
        Commands::File(args) => cmd_file(args)?,
        Commands::Project(args) => cmd_project(args)?,
        Commands::Config { action } => cmd_config(action)?,
        Commands::Doctor { host } => cmd_doctor(&host)?,
    }

    Ok(())
}
