//! Operating-system facts the resolver needs, captured as plain data.
//!
//! [`Platform::current`] is the only place that looks at the running OS;
//! everything downstream takes a `Platform` value and an [`ExistenceOracle`],
//! so each platform's decision tree can be exercised from any host.

mod probe;

#[cfg(test)]
mod tests;

pub use probe::{app_bundle_candidates, find_cli_inside_app, find_installed, install_candidates};
pub(crate) use probe::installed_channel;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Platform family plus the install roots used when probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// macOS; `home` locates the per-user `~/Applications` folder.
    MacOs {
        /// User home directory.
        home: PathBuf,
    },
    /// Windows; roots are absent when the corresponding variable is unset.
    Windows {
        /// `%LOCALAPPDATA%`
        local_app_data: Option<String>,
        /// `%ProgramFiles%`
        program_files: Option<String>,
        /// `%ProgramFiles(x86)%`
        program_files_x86: Option<String>,
    },
    /// Linux, the BSDs and anything else: commands resolve through `PATH`.
    Posix,
}

impl Platform {
    /// Describe the OS this process is running on.
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Self::MacOs {
                home: dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")),
            }
        }
        #[cfg(target_os = "windows")]
        {
            Self::Windows {
                local_app_data: dirs::data_local_dir().map(|p| p.display().to_string()),
                program_files: std::env::var("ProgramFiles").ok(),
                program_files_x86: std::env::var("ProgramFiles(x86)").ok(),
            }
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Self::Posix
        }
    }

    /// Short lowercase label for logs and `doctor` output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MacOs { .. } => "macos",
            Self::Windows { .. } => "windows",
            Self::Posix => "posix",
        }
    }

    /// Program and arguments that ask the OS to open `target`, optionally
    /// with a specific application.
    pub fn os_opener(&self, target: &str, application: Option<&str>) -> (String, Vec<String>) {
        match self {
            Self::MacOs { .. } => {
                let mut args = Vec::new();
                if let Some(app) = application {
                    args.push("-a".to_string());
                    args.push(app.to_string());
                }
                args.push(target.to_string());
                ("open".to_string(), args)
            }
            Self::Windows { .. } => (
                "rundll32.exe".to_string(),
                vec!["url.dll,FileProtocolHandler".to_string(), target.to_string()],
            ),
            Self::Posix => ("xdg-open".to_string(), vec![target.to_string()]),
        }
    }
}

/// Answers "does this path exist?" for the probing code.
pub trait ExistenceOracle {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl ExistenceOracle for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// A fixed set of paths that "exist". Everything else does not.
#[derive(Debug, Clone, Default)]
pub struct FixedFs {
    paths: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl FixedFs {
    /// Build from any list of paths.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            dirs: HashSet::new(),
        }
    }

    /// Also mark `dirs` as existing directories.
    #[must_use]
    pub fn with_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.dirs.extend(dirs.into_iter().map(Into::into));
        self
    }
}

impl ExistenceOracle for FixedFs {
    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path) || self.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}
