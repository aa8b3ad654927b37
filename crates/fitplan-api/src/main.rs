//! Fitplan CLI and HTTP API entry point.
//!
//! Binary name: `fitplan`
//!
//! Parses CLI arguments, loads configuration, then either serves the HTTP
//! API or runs one of the offline helpers.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    fitplan_observe::tracing_setup::init_tracing(cli.log_directives(), cli.log_json, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    fitplan_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            let mut config = fitplan_infra::config::load_config(cli.config.as_deref()).await?;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            // Model must be reachable before the listener opens.
            let state = AppState::init(&config).await?;

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            tracing::info!(addr = %addr, "Fitplan API listening");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("Server stopped");
        }

        Commands::Repair { file, text_only } => {
            let raw = cli::read_input(file.as_deref()).await?;
            println!("{}", cli::repair::render(&raw, text_only)?);
        }

        Commands::Prompt { file } => {
            let input = cli::read_input(file.as_deref()).await?;
            print!("{}", cli::prompt::render(&input)?);
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
