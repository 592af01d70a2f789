use anyhow::Result;
use clap::Subcommand;
use other_editor::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// List each editor's path setting
    Show,
    /// Print the configuration file path
    Path,
    /// Write an empty configuration (auto-detect both editors)
    Init,
    /// Set an editor's path: binary, CLI name, .app bundle or app name.
    /// An empty value clears it.
    Set {
        /// cursor.path or vscode.path
        key: String,
        value: String,
    },
    /// Print an editor's path setting
    Get {
        /// cursor.path or vscode.path
        key: String,
    },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            for (editor, path) in config.entries() {
                let value = path.unwrap_or("(unset, auto-detect)");
                println!("{:<12} {value}    # {editor}", editor.config_key());
            }
        }
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Init => {
            Config::default().save()?;
            println!("Wrote default config to {}", Config::path()?.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            match config.get_value(&key)?.as_str() {
                "" => println!("Cleared {key}; the editor will be auto-detected"),
                set => println!("Set {key} = {set}"),
            }
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}
