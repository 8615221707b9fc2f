//! CLI type definitions
//!
//! Clap command structures that define the `om1` interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::act::ActArgs;
use super::commands::config::ConfigCommands;
use super::commands::key::KeyCommands;

/// Command-line interface of the `om1` binary.
#[derive(Parser, Debug)]
#[command(name = "om1")]
#[command(about = "OM1 action connectors and credential tooling", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Explicit config file instead of .om1/config.yaml
    #[arg(short, long, global = true, env = "OM1_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a face expression through the face connector
    Face(ActArgs),

    /// Send a movement through the move connector
    Move(ActArgs),

    /// API key resolution and validation
    #[command(subcommand)]
    Key(KeyCommands),

    /// Plain configuration lookups
    #[command(subcommand)]
    Config(ConfigCommands),
}
