//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// roomstatus - Is the meeting room free?
#[derive(Debug, Parser)]
#[command(name = "roomstatus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "ROOMSTATUS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub status: StatusArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options of the status view, also accepted without the `status` keyword.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Only show this room
    #[arg(long)]
    pub room: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Read raw events from a JSON file instead of Google Calendar
    #[arg(long, value_name = "PATH")]
    pub events_file: Option<PathBuf>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show room status (default)
    Status(StatusArgs),

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
