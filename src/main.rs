use std::sync::Arc;

use tracing::{error, info};

use sampler::{
    publisher, start_ingest_updater, AppState, Config, Database, IngestionPipeline, WebServer,
};

#[tokio::main]
async fn main() {
    // Load configuration
    let mut config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    // Initialize logging
    if let Err(e) = sampler::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        sampler::logging::init_console_only(&config.logging.level);
    }

    info!("Sampler - video metadata aggregator");

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let db = match Database::open(&config.database.url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to open database {}: {}", config.database.url, e);
            std::process::exit(1);
        }
    };

    // Seed the publisher registry before accepting requests
    publisher::initialize(&db).await;

    let pipeline = match IngestionPipeline::from_config(&config.feed) {
        Ok(pipeline) => Arc::new(pipeline),
        Err(e) => {
            error!("Failed to create feed fetcher: {}", e);
            std::process::exit(1);
        }
    };

    let _updater = start_ingest_updater(
        db.clone(),
        pipeline.clone(),
        config.feed.update_interval_secs,
    );

    let server = match WebServer::new(&config, AppState::new(db, pipeline)) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to create web server: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
