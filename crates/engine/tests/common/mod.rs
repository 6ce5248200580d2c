#![allow(dead_code)]

use std::sync::Arc;

use assetops_core::types::AssetRecord;
use assetops_engine::{BatchEngine, EngineConfig};
use assetops_store::InMemoryAssetStore;

/// Build an asset record under `db://assets` with a derived name.
pub fn record(path: &str, id: &str) -> AssetRecord {
    AssetRecord {
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
        locator: format!("db://assets/{path}"),
        id: id.to_string(),
        kind: "image".to_string(),
        size_bytes: 256,
        is_container: false,
    }
}

/// Wrap a store in an engine with default configuration.
///
/// Returns the shared store handle too so tests can inspect its journal.
pub fn engine_with(store: InMemoryAssetStore) -> (BatchEngine, Arc<InMemoryAssetStore>) {
    engine_with_config(store, EngineConfig::default())
}

pub fn engine_with_config(
    store: InMemoryAssetStore,
    config: EngineConfig,
) -> (BatchEngine, Arc<InMemoryAssetStore>) {
    let store = Arc::new(store);
    let engine = BatchEngine::new(store.clone(), config);
    (engine, store)
}
