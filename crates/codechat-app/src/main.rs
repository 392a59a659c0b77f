//! Codechat application binary - composition root.
//!
//! `codechat chat` opens the interactive client against a backend;
//! `codechat serve` runs the in-memory reference backend.

mod cli;
mod repl;

use clap::Parser;

use codechat_api::AppState;
use codechat_core::config::{ClientConfig, CodechatConfig, ServerConfig};
use codechat_session::{HttpTransport, SessionCoordinator};

use cli::{CliArgs, Command};

async fn run_chat(client: ClientConfig, url: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = cli::resolve_url(url.as_deref(), &client.base_url);
    let transport = HttpTransport::with_timeout(&base_url, client.request_timeout())?;
    tracing::info!(endpoint = transport.endpoint(), "Chat client ready");

    let coordinator = if client.show_greeting {
        SessionCoordinator::new(transport)
    } else {
        SessionCoordinator::without_greeting(transport)
    };

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&coordinator, stdin, &mut stdout).await?;

    if let Some(id) = coordinator.session_id() {
        tracing::info!(session_id = %id, messages = coordinator.len(), "Chat session closed");
    }
    Ok(())
}

async fn run_serve(server: ServerConfig, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let port = cli::resolve_port(port, server.port);
    let host = server.host.clone();
    let state = AppState::new(server);
    codechat_api::start_server(&host, port, state).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let config = CodechatConfig::load_or_default(&config_file);

    let level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());

    // Tracing. Stderr keeps the chat output on stdout clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .init();

    tracing::debug!(path = %config_file.display(), "Configuration loaded");

    match args.command {
        Command::Chat { url } => run_chat(config.client, url).await,
        Command::Serve { port } => {
            tracing::info!("Starting codechat backend v{}", env!("CARGO_PKG_VERSION"));
            run_serve(config.server, port).await
        }
    }
}
