//! Cytewise HTTP Server Binary
//!
//! Main entry point for the citation REST API server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin cytewise-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::EnvFilter;

use cytewise::config::ServerConfig;
use cytewise::http::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    let app = create_router();

    info!("Server starting on port {}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
