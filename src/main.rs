use award_sniper::config::{load_config, AppConfig};
use award_sniper::scraper::ScraperImpl;
use award_sniper::trigger::router;
use award_sniper::AwardChecker;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "award_sniper=info".into()),
        )
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config = if Path::new(CONFIG_PATH).exists() {
        match load_config(CONFIG_PATH) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return;
            }
        }
    } else {
        warn!("{} not found, using built-in defaults", CONFIG_PATH);
        AppConfig::default()
    };

    let scraper = match ScraperImpl::new(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };
    let checker = Arc::new(AwardChecker::new(scraper, config.cabin_classes.clone()));

    let listener = match TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", config.listen_addr, e);
            return;
        }
    };

    info!("🚀 Live checker listening on {}", config.listen_addr);
    if let Err(e) = axum::serve(listener, router(checker)).await {
        error!("Server error: {}", e);
    }
}
