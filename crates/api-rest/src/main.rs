//! Standalone catalog API server binary.
//!
//! ## Purpose
//! Runs the mock condition catalog on its own.
//!
//! ## Intended use
//! Useful when developing the form against a catalog you control. The workspace's main
//! `audience-run` binary runs the catalog API and the form UI together.

use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audience_core::config::socket_addr_from_env_value;
use audience_core::constants::DEFAULT_MOCK_ADDR;

/// Main entry point for the catalog API server
///
/// # Environment Variables
/// - `AUDIENCE_MOCK_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `AUDIENCE_MOCK_DATA`: Optional JSON catalog file replacing the built-in catalog
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the address or catalog file is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr =
        socket_addr_from_env_value(std::env::var("AUDIENCE_MOCK_ADDR").ok(), DEFAULT_MOCK_ADDR)?;
    let data_path = std::env::var("AUDIENCE_MOCK_DATA").ok().map(PathBuf::from);
    let catalog = api_rest::mock::load_catalog(data_path.as_deref())?;

    tracing::info!("-- Starting catalog API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, api_rest::router(catalog)).await?;

    Ok(())
}
