//! CLI command definitions for the `fitplan` binary.
//!
//! `serve` runs the HTTP API. `repair` and `prompt` expose the output repair
//! heuristic and the prompt builder offline, for inspecting model output
//! without a running server.

pub mod prompt;
pub mod repair;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;

/// Fitness plan inference service.
#[derive(Parser)]
#[command(name = "fitplan", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true, env = "FITPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on (overrides the config file).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file).
        #[arg(long)]
        host: Option<String>,
    },

    /// Repair raw model output and print the resulting JSON.
    Repair {
        /// File with raw model output (reads stdin when omitted).
        file: Option<PathBuf>,

        /// Print the patched text without parsing it.
        #[arg(long)]
        text_only: bool,
    },

    /// Render the model prompt for a user request JSON.
    Prompt {
        /// File with a user request JSON (reads stdin when omitted).
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Default log directives derived from `-q` / `-v`.
    pub fn log_directives(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,fitplan=debug,fitplan_core=debug,fitplan_infra=debug",
            _ => "trace",
        }
    }
}

/// Read a whole file, or stdin when `path` is `None`.
pub async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}
