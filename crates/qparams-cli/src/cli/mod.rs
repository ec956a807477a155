//! CLI for the qparams query extractor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qparams_core::config::{self, LoadedConfig, QparamsConfig};
use qparams_core::logging;
use qparams_core::output::OutputFormat;
use std::io;
use std::path::PathBuf;

use commands::{run_extract, run_get, RenderSettings};

/// Top-level CLI for qparams.
#[derive(Debug, Parser)]
#[command(name = "qparams")]
#[command(about = "qparams: print the decoded query parameters of URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/qparams/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: lines, json or toml (overrides the config file).
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Print parameters in map order instead of sorted by name.
    #[arg(long, global = true)]
    pub no_sort: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print all query parameters of each URL (reads URLs from stdin if none are given).
    Extract {
        /// URLs to extract parameters from.
        urls: Vec<String>,
    },

    /// Print the value of one query parameter.
    Get {
        /// URL to extract parameters from.
        url: String,
        /// Parameter name (decoded form).
        name: String,
    },
}

impl Cli {
    fn load_config(&self) -> Result<LoadedConfig> {
        match &self.config {
            Some(path) => Ok(LoadedConfig {
                config: config::load_from(path)?,
                created: None,
            }),
            None => config::load_or_init(),
        }
    }

    fn render_settings(&self, cfg: &QparamsConfig) -> RenderSettings {
        RenderSettings {
            format: self.format.unwrap_or(cfg.output_format),
            sort_keys: cfg.sort_keys && !self.no_sort,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let LoadedConfig {
            config: cfg,
            created,
        } = cli.load_config()?;

        let default_filter = cfg.log_level.as_deref();
        if let Err(err) = logging::init_logging(default_filter) {
            logging::init_logging_stderr(default_filter);
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
        }
        if let Some(path) = created {
            tracing::info!("created default config at {}", path.display());
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let settings = cli.render_settings(&cfg);
        let mut stdout = io::stdout().lock();

        match cli.command {
            CliCommand::Extract { urls } => {
                run_extract(&urls, io::stdin().lock(), &mut stdout, settings)?
            }
            CliCommand::Get { url, name } => run_get(&url, &name, &mut stdout)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
