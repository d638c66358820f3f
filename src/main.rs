use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audience_core::config::{
    data_url_from_env_value, flag_from_env_value, socket_addr_from_env_value,
};
use audience_core::constants::{DEFAULT_MOCK_ADDR, DEFAULT_UI_ADDR};
use audience_core::CoreConfig;
use audience_ui::CatalogLoader;

/// Main entry point for the audience targeting application
///
/// Starts both servers concurrently:
/// - the mock catalog API on port 8000 (configurable via AUDIENCE_MOCK_ADDR)
/// - the form UI on port 3000 (configurable via AUDIENCE_UI_ADDR)
///
/// The form UI fetches its catalog once, right after both listeners are bound.
///
/// # Environment Variables
/// - `AUDIENCE_DATA_URL`: Catalog endpoint the form fetches (default: "http://127.0.0.1:8000/data")
/// - `AUDIENCE_UI_ADDR`: Form UI address (default: "0.0.0.0:3000")
/// - `AUDIENCE_MOCK_ADDR`: Catalog API address (default: "0.0.0.0:8000")
/// - `AUDIENCE_SERVE_MOCK`: Whether to start the catalog API at all (default: true)
/// - `AUDIENCE_MOCK_DATA`: Optional JSON catalog file for the catalog API
///
/// # Returns
/// * `Ok(())` - If servers start and run successfully
/// * `Err(anyhow::Error)` - If configuration, server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("audience_run=info".parse()?)
                .add_directive("audience_ui=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Arc::new(CoreConfig::new(
        data_url_from_env_value(std::env::var("AUDIENCE_DATA_URL").ok())?,
        socket_addr_from_env_value(std::env::var("AUDIENCE_UI_ADDR").ok(), DEFAULT_UI_ADDR)?,
        socket_addr_from_env_value(
            std::env::var("AUDIENCE_MOCK_ADDR").ok(),
            DEFAULT_MOCK_ADDR,
        )?,
        flag_from_env_value(std::env::var("AUDIENCE_SERVE_MOCK").ok(), true)?,
        std::env::var("AUDIENCE_MOCK_DATA").ok().map(PathBuf::from),
    )?);

    // Start catalog API
    let mock_server = if cfg.serve_mock() {
        let catalog = api_rest::mock::load_catalog(cfg.mock_data_path())?;
        let listener = tokio::net::TcpListener::bind(cfg.mock_addr()).await?;
        tracing::info!("++ Starting catalog API on {}", cfg.mock_addr());
        Some(tokio::spawn(async move {
            axum::serve(listener, api_rest::router(catalog)).await
        }))
    } else {
        None
    };

    // Start form UI
    let view = audience_ui::pending_view();
    let ui_listener = tokio::net::TcpListener::bind(cfg.ui_addr()).await?;
    tracing::info!("++ Starting form UI on {}", cfg.ui_addr());
    let ui_app = audience_ui::router(view.clone());
    let ui_server = tokio::spawn(async move { axum::serve(ui_listener, ui_app).await });

    // One catalog load per process
    let loader = CatalogLoader::new(cfg.data_url())?;
    tokio::spawn(audience_ui::load_into(view, loader));

    run_servers(ui_server, mock_server).await
}

type ServerHandle = JoinHandle<std::io::Result<()>>;

async fn server_result(handle: ServerHandle) -> anyhow::Result<()> {
    handle.await??;
    Ok(())
}

/// Wait on the running servers; the first one to fail ends the process.
async fn run_servers(
    ui_server: ServerHandle,
    mock_server: Option<ServerHandle>,
) -> anyhow::Result<()> {
    match mock_server {
        Some(mock_server) => {
            tokio::try_join!(server_result(ui_server), server_result(mock_server))?;
        }
        None => server_result(ui_server).await?,
    }
    Ok(())
}
