//! Development backend for UI work
//!
//! Runs the in-memory stand-in backend on a fixed port with a seeded demo
//! dataset, so the browser UI can be developed without the real service.
//!
//! Environment variables (a `.env` file in the working directory is also
//! read):
//! - IP_ADDRESS: bind address, default 127.0.0.1
//! - PORT: bind port, default 8000
//! - ALLOWED_ORIGINS: CORS origins, "*" or a comma-separated list
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::backend::Config;
use test_helpers::mock::DevDataset;
use test_helpers::telemetry::{get_subscriber, init_subscriber};
use tracing::info;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    // Silently ignored if the file doesn't exist
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info".into()))?;

    info!("🚀 Starting development backend");

    let mut config = Config::from_env()?;
    if std::env::var("PORT").is_err() {
        config.port = DEFAULT_PORT;
    }
    let app = test_helpers::spawn_app_with(config)?;

    info!("✅ API server running on {}", app.address());

    info!("📊 Setting up development data...");
    let dataset = DevDataset::create(&app).await?;

    info!("🎯 Development backend ready!");
    info!("   API: {}", app.address());
    info!("   UI:  cd ui && BACKEND_URL={} trunk serve", app.address());
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development backend");
    Ok(())
}
