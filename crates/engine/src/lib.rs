//! Batch operations over an asset catalog.
//!
//! [`BatchEngine`] owns a handle to the asset store and nothing else: no
//! call leaves state behind for the next one. Each operation lives in its
//! own module as an `impl BatchEngine` block:
//!
//! - [`locator`]: identifier normalization, free-locator probing, reveal
//!   and save-meta
//! - [`import`]: sequential batch import from a directory
//! - [`delete`]: bulk delete with optimistic per-item reporting
//! - [`validate`]: scatter/gather reference validation
//! - [`export`]: manifest collection, enrichment and rendering

use std::sync::Arc;

use assetops_core::error::CoreError;
use assetops_core::locator::{scope_glob, DEFAULT_PROBE_MAX_ATTEMPTS, DEFAULT_SCOPE};
use assetops_core::types::StoreReadiness;
use assetops_store::AssetStore;

pub mod delete;
pub mod export;
pub mod import;
pub mod locator;
pub mod validate;

pub use import::ImportRequest;

/// Fixed message for the dependency-tree capability.
pub const DEPENDENCY_TREE_UNSUPPORTED: &str =
    "Dependency tree traversal is not supported: the asset store exposes no dependency query";

/// Fixed message for the unused-asset capability.
pub const UNUSED_ASSETS_UNSUPPORTED: &str =
    "Unused asset detection is not supported: the asset store exposes no reference query";

/// Tunables for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Scope used when a caller does not name one.
    pub default_scope: String,
    /// Suffixed candidates the prober tries after the original locator.
    pub probe_max_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_scope: DEFAULT_SCOPE.to_string(),
            probe_max_attempts: DEFAULT_PROBE_MAX_ATTEMPTS,
        }
    }
}

pub struct BatchEngine {
    store: Arc<dyn AssetStore>,
    config: EngineConfig,
}

impl BatchEngine {
    pub fn new(store: Arc<dyn AssetStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn scope_or_default<'a>(&'a self, scope: Option<&'a str>) -> &'a str {
        scope
            .filter(|s| !s.is_empty())
            .unwrap_or(self.config.default_scope.as_str())
    }

    /// List the default scope and report whether the store answered.
    ///
    /// Never fails: a failing listing is reported as `ready: false`.
    pub async fn check_store_ready(&self) -> StoreReadiness {
        match self
            .store
            .list_assets(&scope_glob(&self.config.default_scope))
            .await
        {
            Ok(_) => StoreReadiness {
                ready: true,
                error_message: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Asset store readiness check failed");
                StoreReadiness {
                    ready: false,
                    error_message: Some(e.to_string()),
                }
            }
        }
    }

    /// The store has no dependency query, so this is always an error.
    pub fn dependency_tree(&self) -> CoreError {
        CoreError::Unsupported(DEPENDENCY_TREE_UNSUPPORTED)
    }

    /// The store has no reference query, so this is always an error.
    pub fn unused_assets(&self) -> CoreError {
        CoreError::Unsupported(UNUSED_ASSETS_UNSUPPORTED)
    }
}
