//! CLI for favstrip.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use favstrip_core::config::{self, StripConfig};
use std::path::PathBuf;

use commands::{run_show_config, run_strip};

/// Top-level CLI for favstrip.
#[derive(Debug, Parser)]
#[command(name = "favstrip")]
#[command(about = "Remove favicon.ico lines from HTML files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite every matching file without the marker lines (default).
    Run(RunArgs),

    /// Print the config file path and the effective configuration.
    Config {
        /// Read this config file instead of the XDG one.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Directory to scan (non-recursive).
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// File-name glob inside the directory, e.g. "*.html".
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Lines containing this text are removed.
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Read this config file instead of the XDG one.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RunArgs {
    /// Flags take precedence over the loaded config.
    pub fn apply(&self, mut cfg: StripConfig) -> StripConfig {
        if let Some(dir) = &self.dir {
            cfg.docs_dir = dir.clone();
        }
        if let Some(pattern) = &self.pattern {
            cfg.pattern = pattern.clone();
        }
        if let Some(marker) = &self.marker {
            cfg.marker = marker.clone();
        }
        cfg
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<StripConfig> {
    match explicit {
        Some(path) => config::load_from_path(path),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli
            .command
            .unwrap_or_else(|| CliCommand::Run(RunArgs::default()));

        match command {
            CliCommand::Run(args) => {
                let cfg = args.apply(load_config(args.config.as_ref())?);
                tracing::debug!("effective config: {:?}", cfg);
                run_strip(&cfg)?;
            }
            CliCommand::Config { config } => {
                let cfg = load_config(config.as_ref())?;
                run_show_config(config.as_deref(), &cfg)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
