//! repokit CLI library

#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::MakeRepositoryCommand;

/// Command line entry point
#[derive(Debug, Parser)]
#[command(name = "repokit")]
#[command(version)]
#[command(about = "Scaffold repository classes for ORM models", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a repository class into the app/Repositories folder
    #[command(alias = "make:repository")]
    MakeRepository(MakeRepositoryCommand),
}

impl Cli {
    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::MakeRepository(cmd) => cmd.execute(),
        }
    }
}
