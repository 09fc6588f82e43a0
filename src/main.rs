// ABOUTME: CLI entry point for the searchgate server binary
// ABOUTME: Parses arguments, reads env config, opens the store, and starts the axum server
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use searchgate::config::AppConfig;
use searchgate::router;
use searchgate::state::AppState;
use searchgate::store::FileStore;

/// searchgate — search API proxy with an operator admin console
#[derive(Parser)]
#[command(name = "searchgate", version, about)]
struct Cli {
    /// HTTP listen port
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// HTTP listen host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Path of the JSON file backing the config store
    #[arg(long, default_value = "searchgate-config.json")]
    store: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = AppConfig::from_env();
    if config.session_token.is_empty() {
        tracing::warn!(
            "No session token configured; admin login is disabled until SEARCHGATE_SESSION_TOKEN is set"
        );
    }

    let store = Arc::new(FileStore::new(&cli.store));
    let state = Arc::new(AppState::new(config, store));
    let app = router::build(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        address = %addr,
        store = %cli.store.display(),
        "Starting searchgate server"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
