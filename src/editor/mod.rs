//! The two editors this tool hops between, and detection of which one
//! is hosting the current process.

mod host;


pub use host::{detect_host, other_of, Host, HostSignals};

/// One of the two editors this tool hops between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum TargetEditor {
    /// Cursor
    Cursor,
    /// Visual Studio Code
    #[value(name = "vscode", alias = "code")]
    VsCode,
}

/// VS Code ships a stable and an Insiders build with different URL schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Regular release.
    Stable,
    /// Preview build.
    Insiders,
}

impl TargetEditor {
    /// Name shown to the user in notifications.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cursor => "Cursor",
            Self::VsCode => "VS Code",
        }
    }

    /// Conventional CLI shim installed on `PATH`.
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::VsCode => "code",
        }
    }

    /// Key under which the configured path is stored.
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Cursor => "cursor.path",
            Self::VsCode => "vscode.path",
        }
    }

    /// URL scheme registered by the editor on macOS.
    pub const fn url_scheme(self, channel: Channel) -> &'static str {
        match (self, channel) {
            (Self::Cursor, _) => "cursor",
            (Self::VsCode, Channel::Stable) => "vscode",
            (Self::VsCode, Channel::Insiders) => "vscode-insiders",
        }
    }

    /// macOS application name, as used by `open -a` and the bundle file name.
    pub const fn app_name(self, channel: Channel) -> &'static str {
        match (self, channel) {
            (Self::Cursor, _) => "Cursor",
            (Self::VsCode, Channel::Stable) => "Visual Studio Code",
            (Self::VsCode, Channel::Insiders) => "Visual Studio Code - Insiders",
        }
    }

    /// Release channels to probe on macOS, in preference order.
    pub const fn channels(self) -> &'static [Channel] {
        match self {
            Self::Cursor => &[Channel::Stable],
            Self::VsCode => &[Channel::Stable, Channel::Insiders],
        }
    }

    /// Lowercase CLI shim names accepted verbatim from configuration.
    pub const fn shim_names(self) -> &'static [&'static str] {
        match self {
            Self::Cursor => &["cursor"],
            Self::VsCode => &["code", "code-insiders"],
        }
    }

    /// Every supported editor, in a fixed order.
    pub const fn all() -> [Self; 2] {
        [Self::Cursor, Self::VsCode]
    }
}

impl std::fmt::Display for TargetEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
