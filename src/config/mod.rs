//! Per-editor path settings, stored at `~/.config/other-editor/config.toml`.

mod ops;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::editor::TargetEditor;

/// User settings, stored as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Settings used when Cursor is the target.
    pub cursor: EditorSettings,
    /// Settings used when VS Code is the target.
    pub vscode: EditorSettings,
}

/// Per-editor settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorSettings {
    /// Binary path, CLI name, `.app` bundle, or application name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Config {
    /// Every settable key, one per editor.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        TargetEditor::all().into_iter().map(TargetEditor::config_key)
    }

    /// Each editor with its configured path, in a fixed order.
    pub fn entries(&self) -> impl Iterator<Item = (TargetEditor, Option<&str>)> + '_ {
        TargetEditor::all()
            .into_iter()
            .map(|editor| (editor, self.configured_path(editor)))
    }

    /// Configured path for `editor`; blank values count as unset.
    pub fn configured_path(&self, editor: TargetEditor) -> Option<&str> {
        self.settings(editor)
            .path
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    const fn settings(&self, editor: TargetEditor) -> &EditorSettings {
        match editor {
            TargetEditor::Cursor => &self.cursor,
            TargetEditor::VsCode => &self.vscode,
        }
    }

    fn settings_mut(&mut self, editor: TargetEditor) -> &mut EditorSettings {
        match editor {
            TargetEditor::Cursor => &mut self.cursor,
            TargetEditor::VsCode => &mut self.vscode,
        }
    }
}
