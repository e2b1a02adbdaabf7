//! scriptform CLI and web form server entry point.
//!
//! Binary name: `sform`
//!
//! Parses CLI arguments, initializes tracing and application state, then
//! dispatches to the command handler or starts the web server.

mod cli;
mod http;
mod render;
mod state;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use scriptform_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use state::{AppState, ServeState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = dispatch(cli).await;
    shutdown_tracing();
    result
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "sform", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Form { script, format } => {
            cli::form::show_form(&state, script.as_deref(), format, cli.json).await?;
        }

        Commands::Run { script } => {
            cli::run::run_script(&state, script.as_deref(), cli.json, cli.quiet).await?;
        }

        Commands::Replay {
            script,
            answers,
            answers_file,
        } => {
            cli::replay::replay_script(
                &state,
                script.as_deref(),
                answers,
                answers_file,
                cli.json,
                cli.quiet,
            )
            .await?;
        }

        Commands::Serve { script, port, host } => {
            let source = state.resolve_script(script.as_deref())?;
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;

            if !cli.quiet {
                println!(
                    "  {} Serving {} on {}",
                    console::style("⚡").bold(),
                    console::style(&source).yellow(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, script = %source, "web form server listening");

            let router = http::router::build_router(ServeState::new(state, source));

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
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
                tracing::error!("failed to install SIGTERM handler: {e}");
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
