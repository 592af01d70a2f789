//! Runs resolved commands as child processes.

mod shell;


pub use shell::augmented_path;

use std::io::{self, ErrorKind};
use std::process::{Command, Output, Stdio};

use tracing::{debug, info};

use crate::error::ProcessError;

/// Run `program` with `args` and wait for it to finish.
///
/// Both editors' launchers detach from their output streams as soon as the
/// GUI is up, which surfaces as a broken pipe; that counts as success.
pub fn execute(program: &str, args: &[String]) -> Result<(), ProcessError> {
    info!(program, ?args, "launching");
    let output = Command::new(program)
        .args(args)
        .env("PATH", augmented_path())
        .stdin(Stdio::null())
        .output();
    outcome(program, output)
}

/// Classify the result of running `program`.
fn outcome(program: &str, output: io::Result<Output>) -> Result<(), ProcessError> {
    let output = match output {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!(program, "broken pipe from launcher, treating as success");
            return Ok(());
        }
        Err(source) => {
            return Err(ProcessError::Spawn {
                program: program.to_string(),
                source,
            })
        }
    };

    debug!(
        program,
        status = %output.status,
        stdout = %String::from_utf8_lossy(&output.stdout).trim(),
        stderr = %String::from_utf8_lossy(&output.stderr).trim(),
        "launcher finished"
    );

    if output.status.success() {
        Ok(())
    } else {
        Err(ProcessError::exit(program, output.status, &output.stderr))
    }
}
