//! CLI, configuration and rendering for roomstatus.
//!
//! This crate provides the `roomstatus` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod secret;

pub use cli::Cli;
pub use config::PanelConfig;
pub use error::{ClientError, ClientResult};
