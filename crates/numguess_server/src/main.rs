//! numguess - unified CLI
//!
//! Runs the JSON game server or a terminal game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use numguess::{Difficulty, SessionRegistry};
use numguess_server::{AppState, ServerConfig, TerminalGame, router};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            port,
            host,
            seed,
            difficulty,
        } => run_http_server(config, host, port, seed, difficulty).await,
        Command::Play { difficulty, seed } => run_terminal(difficulty, seed),
    }
}

/// Run the HTTP game server
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_http_server(
    config_path: PathBuf,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    initialize_tracing("info,numguess=debug,numguess_server=debug,tower_http=debug");

    let config = ServerConfig::load_or_default(&config_path)?
        .with_port_var(std::env::var("PORT").ok().as_deref())?
        .with_overrides(host, port, seed, difficulty);

    let registry = build_registry(*config.seed());
    let state = AppState::new(registry, *config.default_difficulty());
    let app = router(state, *config.cors());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("🎮 Number Guessing Game API running at http://{}", config.bind_addr());
    info!("📡 Health check: http://{}/health", config.bind_addr());
    info!("🤖 Chatbot endpoint: http://{}/api/chatbot", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Run the terminal game on stdin/stdout
fn run_terminal(difficulty: Difficulty, seed: Option<u64>) -> Result<()> {
    initialize_tracing("warn");

    let mut game = TerminalGame::new(build_registry(seed), difficulty);
    let stdin = std::io::stdin();
    game.run(stdin.lock(), std::io::stdout())?;
    Ok(())
}

fn build_registry(seed: Option<u64>) -> SessionRegistry {
    match seed {
        Some(seed) => {
            info!(seed, "Using seeded target source");
            SessionRegistry::seeded(seed)
        }
        None => SessionRegistry::new(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
