//! CLI for the pagepix page image fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagepix_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_list};

/// Top-level CLI for the pagepix page image fetcher.
#[derive(Debug, Parser)]
#[command(name = "pagepix")]
#[command(about = "pagepix: concurrent page image fetcher with WebP-to-JPEG normalization", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every image referenced by a page, converting WebP to JPEG.
    Fetch {
        /// Page URL to scan for images.
        url: String,

        /// Output folder for the downloaded images (default from config).
        #[arg(long, value_name = "DIR")]
        folder: Option<PathBuf>,

        /// Run up to N image downloads concurrently (default from config).
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
    },

    /// List the resolved image URLs on a page without downloading anything.
    List {
        /// Page URL to scan for images.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                url,
                folder,
                workers,
            } => run_fetch(&cfg, &url, folder, workers)?,
            CliCommand::List { url } => run_list(&cfg, &url)?,
        }

        Ok(())
    }
}
