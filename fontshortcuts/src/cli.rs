use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Step or reset editor and terminal font sizes in a settings file
#[derive(Debug, Parser)]
#[command(name = "fontshortcuts", version)]
pub struct Cli {
    /// Tool configuration file (default: ~/.config/fontshortcuts/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// User settings file, overriding the configured one
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Workspace settings file, overriding the configured one
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum CliCommand {
    /// Run a command by id, e.g. fontshortcuts.increaseEditorFontSize
    Run { id: String },
    /// Run the command bound to a key chord, e.g. ctrl+=
    Key { chord: String },
    /// List commands and their key chords
    List,
    /// Print the effective value of a setting
    Get { key: String },
}
