use super::{OpenTarget, ResolvedInvocation};
use crate::editor::TargetEditor;
use crate::platform::{find_installed, install_candidates, ExistenceOracle, Platform};

/// `cmd.exe` flags: skip AutoRun, keep quoting as-is, run then exit.
const SHELL_PREFIX: &[&str] = &["/d", "/s", "/c"];

fn looks_like_executable_path(s: &str) -> bool {
    s.to_ascii_lowercase().ends_with(".exe") || s.contains('\\') || s.contains('/')
}

/// Bare names like `code` are `.cmd` shims that only `cmd.exe` resolves.
fn via_shell(name: &str, mut args: Vec<String>) -> ResolvedInvocation {
    let mut shell_args: Vec<String> = SHELL_PREFIX.iter().map(|s| (*s).to_string()).collect();
    shell_args.push(name.to_string());
    shell_args.append(&mut args);
    ResolvedInvocation::Exec {
        command: "cmd.exe".to_string(),
        args: shell_args,
    }
}

pub(super) fn resolve(
    editor: TargetEditor,
    target: OpenTarget<'_>,
    configured: &str,
    platform: &Platform,
    fs: &dyn ExistenceOracle,
) -> ResolvedInvocation {
    let args = target.cli_args();

    if !configured.is_empty() {
        if looks_like_executable_path(configured) {
            return ResolvedInvocation::Exec {
                command: configured.to_string(),
                args,
            };
        }
        return via_shell(configured, args);
    }

    let candidates = install_candidates(editor, platform);
    if let Some(exe) = find_installed(&candidates, fs) {
        return ResolvedInvocation::Exec {
            command: exe.display().to_string(),
            args,
        };
    }

    via_shell(editor.cli_name(), args)
}
