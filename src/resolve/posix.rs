use super::{OpenTarget, ResolvedInvocation};
use crate::editor::TargetEditor;

/// No probing: the configured command, else the conventional CLI name.
pub(super) fn resolve(
    editor: TargetEditor,
    target: OpenTarget<'_>,
    configured: &str,
) -> ResolvedInvocation {
    let command = if configured.is_empty() {
        editor.cli_name()
    } else {
        configured
    };
    ResolvedInvocation::Exec {
        command: command.to_string(),
        args: target.cli_args(),
    }
}
