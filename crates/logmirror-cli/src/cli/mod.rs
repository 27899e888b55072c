//! CLI for the logmirror bulk log mirror.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use logmirror_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_list, run_mirror};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "logmirror")]
#[command(about = "Mirror the bluesmote proxy log archives into a local tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Crawl every listing page and download all log archives.
    Run {
        /// Local root for the mirrored tree (overrides download_root in config.toml).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Print the archive links on each listing page without downloading.
    List,

    /// Compute MD5 of a file (e.g. to re-check a mirrored archive).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run { root } => {
                let mut cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                if let Some(root) = root {
                    cfg.download_root = root;
                }
                cfg.validate()?;
                run_mirror(&cfg)?;
            }
            CliCommand::List => {
                let cfg = config::load_or_init()?;
                run_list(&cfg)?;
            }
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
