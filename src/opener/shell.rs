use std::ffi::OsString;
use std::path::PathBuf;

/// `PATH` with the usual CLI-shim locations prepended, so commands spawned
/// from a GUI session (which gets a minimal `PATH`) still find `code`/`cursor`.
pub fn augmented_path() -> OsString {
    let current = std::env::var_os("PATH").unwrap_or_default();
    let extras = ["/usr/local/bin", "/opt/homebrew/bin", "/opt/homebrew/sbin"];
    let mut parts: Vec<PathBuf> = if cfg!(windows) {
        Vec::new()
    } else {
        extras.iter().map(PathBuf::from).collect()
    };
    for p in std::env::split_paths(&current) {
        if !p.as_os_str().is_empty() && !parts.contains(&p) {
            parts.push(p);
        }
    }
    std::env::join_paths(parts).unwrap_or(current)
}
