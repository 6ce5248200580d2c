use std::sync::Arc;

use assetops_engine::BatchEngine;
use assetops_server::config::ServerConfig;
use assetops_server::dispatcher::ToolDispatcher;
use assetops_server::stdio;
use assetops_store::InMemoryAssetStore;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Stdout carries responses; logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assetops_server=info,assetops_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        default_scope = %config.default_scope,
        probe_max_attempts = config.probe_max_attempts,
        "Configuration loaded"
    );

    let store = match &config.catalog_seed_path {
        Some(path) => match InMemoryAssetStore::from_seed_file(path).await {
            Ok(store) => {
                tracing::info!(path = %path.display(), "Catalog seeded");
                store
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load catalog seed");
                std::process::exit(1);
            }
        },
        None => InMemoryAssetStore::new(),
    };

    let engine = Arc::new(BatchEngine::new(Arc::new(store), config.engine_config()));
    let dispatcher = ToolDispatcher::new(engine);

    tracing::info!("Serving tool calls on stdin");
    let reader = BufReader::new(tokio::io::stdin());
    if let Err(e) = stdio::serve(&dispatcher, reader, tokio::io::stdout()).await {
        tracing::error!(error = %e, "Stdio driver failed");
        std::process::exit(1);
    }
}
