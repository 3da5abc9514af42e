//! Itinerary API server
//!
//! Reads configuration from a TOML file (`ITINERARY_CONFIG`, or
//! `~/.config/itinerary-api/config.toml`), then serves the REST API until
//! SIGINT/SIGTERM.

use tracing::{error, info};

use itinerary_api::config::{config_path_from_env, AppConfig};
use itinerary_api::server::{init_tracing, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_path_from_env();
    let loaded = AppConfig::load(&config_path);

    let config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };
    init_tracing(&config);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    let handle = match ServerHandle::start(ServerOptions {
        config,
        auto_migrate: true,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e);
        }
    };

    handle.install_signal_handler();
    handle.wait().await;
    Ok(())
}
