#![allow(dead_code)]

use std::sync::Arc;

use assetops_core::types::AssetRecord;
use assetops_engine::{BatchEngine, EngineConfig};
use assetops_server::dispatcher::ToolDispatcher;
use assetops_store::InMemoryAssetStore;

pub fn record(path: &str, id: &str) -> AssetRecord {
    AssetRecord {
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
        locator: format!("db://assets/{path}"),
        id: id.to_string(),
        kind: "image".to_string(),
        size_bytes: 64,
        is_container: false,
    }
}

/// Dispatcher over `store` with default engine configuration, plus the
/// shared store handle for journal assertions.
pub fn dispatcher_with(store: InMemoryAssetStore) -> (ToolDispatcher, Arc<InMemoryAssetStore>) {
    let store = Arc::new(store);
    let engine = BatchEngine::new(store.clone(), EngineConfig::default());
    (ToolDispatcher::new(Arc::new(engine)), store)
}
