//! Open the current file, cursor position or project of one editor in the
//! other: Cursor ⇄ VS Code.

pub mod config;
pub mod editor;
pub mod error;
pub mod hop;
pub mod location;
pub mod logging;
pub mod opener;
pub mod platform;
pub mod resolve;

pub use config::Config;
pub use editor::TargetEditor;
pub use error::{OpenError, ProcessError};
pub use hop::{FileRequest, Hop, Launcher, SystemLauncher};
pub use location::{ActiveDocument, Cursor, EditorLocation};
pub use platform::{ExistenceOracle, Platform, RealFs};
pub use resolve::{resolve_open_file, resolve_open_project, ResolvedInvocation};
