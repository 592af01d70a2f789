use anyhow::{Context, Result};
use other_editor::{
    location::EditorLocation,
    platform::{find_installed, install_candidates},
    resolve_open_file, resolve_open_project, Config, Platform, RealFs, TargetEditor,
};

use super::HostArgs;

/// Print what was detected and what would run for the current directory.
pub fn cmd_doctor(host: &HostArgs) -> Result<()> {
    let config = Config::load()?;
    let platform = Platform::current();
    let cwd = std::env::current_dir().context("Could not determine current directory")?;

    println!("host:     {:?}", host.host());
    println!("target:   {}", host.target());
    println!("platform: {}", platform.label());
    println!("config:   {}", Config::path()?.display());

    for editor in TargetEditor::all() {
        println!("\n[{editor}]");
        let configured = config.configured_path(editor);
        println!("  {}: {}", editor.config_key(), configured.unwrap_or("(unset)"));
        match which::which(editor.cli_name()) {
            Ok(path) => println!("  {} on PATH: {}", editor.cli_name(), path.display()),
            Err(_) => println!("  {} on PATH: not found", editor.cli_name()),
        }
        let candidates = install_candidates(editor, &platform);
        if !candidates.is_empty() {
            match find_installed(&candidates, &RealFs) {
                Some(path) => println!("  installed: {}", path.display()),
                None => println!("  installed: not found in {} locations", candidates.len()),
            }
        }
        let project = resolve_open_project(editor, &cwd, configured, &platform, &RealFs);
        println!("  project:   {project}");
        let file = EditorLocation::new(cwd.join("README.md"), None);
        let file = resolve_open_file(editor, &file, configured, &platform, &RealFs);
        println!("  file:      {file}");
    }
    Ok(())
}
