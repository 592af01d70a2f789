//! Turns what the editor knows (a document reference, a zero-based cursor,
//! the open workspace folders) into the paths and 1-based positions the
//! resolver works with.

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::OpenError;
use crate::platform::ExistenceOracle;

/// Zero-based cursor position as editors report it internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line.
    pub row: u32,
    /// Zero-based character offset.
    pub col: u32,
}

impl Cursor {
    /// Build from 1-based user input; zero is clamped to the first line/column.
    pub const fn from_one_based(line: u32, column: u32) -> Self {
        Self {
            row: line.saturating_sub(1),
            col: column.saturating_sub(1),
        }
    }
}

/// An absolute file path plus a 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLocation {
    /// Absolute path of the file.
    pub file_path: PathBuf,
    /// 1-based line, never zero.
    pub line: u32,
    /// 1-based column, never zero.
    pub column: u32,
}

impl EditorLocation {
    /// Place `file_path` at `cursor`, or at 1:1 when no cursor is known.
    pub fn new(file_path: PathBuf, cursor: Option<Cursor>) -> Self {
        let cursor = cursor.unwrap_or_default();
        Self {
            file_path,
            line: cursor.row.saturating_add(1),
            column: cursor.col.saturating_add(1),
        }
    }

    /// `<path>:<line>:<column>`, the form both editors accept after `--goto`.
    pub fn goto_arg(&self) -> String {
        format!("{}:{}:{}", self.file_path.display(), self.line, self.column)
    }
}

/// The document currently focused in the host editor.
#[derive(Debug, Clone)]
pub struct ActiveDocument {
    /// Path or `file://` URI of the document.
    pub reference: String,
    /// Cursor in that document, if there is one.
    pub cursor: Option<Cursor>,
}

/// Resolve a plain path or `file://` URI to an absolute local path.
///
/// Relative paths are joined onto `cwd`. Any other URI scheme is rejected,
/// unless the reference names an existing file under `cwd` (`notes:v2.md`).
pub fn source_path(
    reference: &str,
    cwd: &Path,
    fs: &dyn ExistenceOracle,
) -> Result<PathBuf, OpenError> {
    // A single-letter scheme is a Windows drive (`C:\...`), not a URI.
    if let Ok(url) = Url::parse(reference) {
        if url.scheme().len() > 1 && !fs.exists(&cwd.join(reference)) {
            if url.scheme() != "file" {
                return Err(OpenError::UnsupportedSource(reference.to_string()));
            }
            return url
                .to_file_path()
                .map_err(|()| OpenError::UnsupportedSource(reference.to_string()));
        }
    }
    let path = Path::new(reference);
    Ok(if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    })
}

/// Pick the file to open and where the cursor goes.
///
/// An explicit reference wins over the active document. The cursor is only
/// carried over when the chosen file is the active document.
pub fn map_location(
    explicit: Option<&str>,
    active: Option<&ActiveDocument>,
    cwd: &Path,
    fs: &dyn ExistenceOracle,
) -> Result<EditorLocation, OpenError> {
    let file_path = match explicit {
        Some(reference) => source_path(reference, cwd, fs)?,
        None => {
            let doc = active.ok_or(OpenError::NoActiveFile)?;
            source_path(&doc.reference, cwd, fs)?
        }
    };

    let cursor = active
        .filter(|doc| source_path(&doc.reference, cwd, fs).is_ok_and(|p| p == file_path))
        .and_then(|doc| doc.cursor);
    Ok(EditorLocation::new(file_path, cursor))
}

/// The most specific workspace root containing `file`, else its parent directory.
pub fn workspace_root_for(file: &Path, roots: &[PathBuf]) -> PathBuf {
    roots
        .iter()
        .filter(|root| file.starts_with(root))
        .max_by_key(|root| root.components().count())
        .cloned()
        .unwrap_or_else(|| {
            file.parent()
                .map_or_else(|| file.to_path_buf(), Path::to_path_buf)
        })
}
