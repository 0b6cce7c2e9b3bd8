//! Village Info HTTP Server Binary
//!
//! This is the main entry point for the village-info REST API server.
//! It loads configuration, constructs the dataset store and Gemini client,
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run --bin village-info-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `VILLAGE_DATASET_DIR`: Directory of per-state CSV files (default: ./village_dataset)
//! - `GEMINI_API_KEY`: API key for the suggestion endpoints
//! - `GEMINI_MODEL`: Gemini model name (default: gemini-1.5-flash)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use village_info::config::AppConfig;
use village_info::dataset::DatasetStore;
use village_info::http::{create_router, AppState};
use village_info::suggest::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Village Info HTTP Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set; /gemini endpoints will fail until it is provided");
    }
    if !config.dataset_dir.is_dir() {
        warn!(
            dataset_dir = %config.dataset_dir.display(),
            "dataset directory not found; data endpoints will return errors"
        );
    }

    // Create application state
    let datasets = Arc::new(DatasetStore::new(config.dataset_dir.clone()));
    let generative = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    let state = AppState::new(datasets, generative);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
