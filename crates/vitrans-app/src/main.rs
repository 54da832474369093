//! Main entry point for the ViTrans application.

use tracing::{error, info};
use vitrans_app::{App, AppConfig, AppError, AppResult};
use vitrans_common::logging::{init_logging, LoggingConfig};

#[tokio::main]
async fn main() -> AppResult<()> {
    init_logging(LoggingConfig {
        level: "vitrans=info".to_string(),
        ..LoggingConfig::default()
    })
    .map_err(|e| AppError::Config(format!("Failed to initialize logging: {e}")))?;

    info!("Starting ViTrans");

    let config = AppConfig::load_from_env()?;
    let app = App::with_console(&config)?;

    if let Err(e) = app.run().await {
        error!("Application failed: {}", e);
        return Err(e);
    }

    Ok(())
}
