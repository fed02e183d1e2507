//! roomstatus CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use roomstatus_core::{TracingConfig, init_tracing};

use roomstatus_client::cli::{Cli, Command, ConfigAction};
use roomstatus_client::commands;
use roomstatus_client::config::PanelConfig;
use roomstatus_client::error::{ClientError, ClientResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(TracingConfig::cli(cli.debug)) {
        eprintln!("warning: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config = match cli.config {
        Some(ref path) => PanelConfig::load_from(path).map_err(ClientError::Config)?,
        None => PanelConfig::load().map_err(ClientError::Config)?,
    };

    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
        Some(Command::Status(args)) => commands::status::run(&args, &config).await,
        None => commands::status::run(&cli.status, &config).await,
    }
}
