//! Todo Manager
//!
//! A REST service for todos, projects and categories, speaking JSON and XML.

use clap::Parser;
use todo_persistence::backends::memory::MemoryBackend;
use todo_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Creates the in-memory backend, seeded unless disabled.
fn create_memory_backend(config: &ServerConfig) -> anyhow::Result<MemoryBackend> {
    if config.seed_data {
        Ok(MemoryBackend::seeded()?)
    } else {
        info!("Starting with an empty store");
        Ok(MemoryBackend::new())
    }
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %listener.local_addr()?, "Server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        legacy_errors = config.legacy_error_messages,
        seed_data = config.seed_data,
        "Starting Todo Manager"
    );

    let backend = create_memory_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
