//! Errors reported by the open actions and the process executor.

use thiserror::Error;

/// Why an open request was not carried out.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The reference uses a URI scheme other than `file`.
    #[error("'{0}' is not a local file")]
    UnsupportedSource(String),

    /// No file was given and no document is active.
    #[error("no active file to open")]
    NoActiveFile,

    /// Project open was requested with no workspace folder open.
    #[error("no workspace folder is open")]
    NoWorkspace,

    /// The external command failed.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// A child process that could not be started or exited unsuccessfully.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be spawned at all.
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// Program that was run.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The program ran and reported failure.
    #[error("{program} exited with {status}{detail}")]
    Exit {
        /// Program that was run.
        program: String,
        /// Exit status as reported by the OS.
        status: String,
        /// `": <stderr>"` when the program wrote anything, else empty.
        detail: String,
    },
}

impl ProcessError {
    pub(crate) fn exit(program: &str, status: std::process::ExitStatus, stderr: &[u8]) -> Self {
        let stderr = String::from_utf8_lossy(stderr);
        let stderr = stderr.trim();
        Self::Exit {
            program: program.to_string(),
            status: status.to_string(),
            detail: if stderr.is_empty() {
                String::new()
            } else {
                format!(": {stderr}")
            },
        }
    }
}
