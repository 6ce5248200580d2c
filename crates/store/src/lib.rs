//! Asset store collaborator interface.
//!
//! The engine reaches the catalog only through [`AssetStore`]. Each method
//! resolves to a value or a [`StoreError`]; the engine decides what a
//! failure means (for the locator prober, a failed lookup is good news).
//!
//! [`memory::InMemoryAssetStore`] is the reference implementation used by
//! the stdio server and by tests.

use std::path::Path;

use assetops_core::error::CoreError;
use assetops_core::types::AssetRecord;
use async_trait::async_trait;

pub mod glob;
pub mod kind;
pub mod memory;

pub use memory::InMemoryAssetStore;

/// Asset-store error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset already exists: {0}")]
    AlreadyExists(String),

    /// The store refused the request for its own reasons.
    #[error("{0}")]
    Rejected(String),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid catalog seed: {0}")]
    InvalidSeed(String),

    #[error("Asset store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Store(err.to_string())
    }
}

/// Capabilities the batch engine consumes from the asset store.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Resolve a locator to its id. Fails when no entry has that locator.
    async fn lookup_id_by_locator(&self, locator: &str) -> Result<String, StoreError>;

    /// Resolve an id to its locator.
    async fn lookup_locator_by_id(&self, id: &str) -> Result<String, StoreError>;

    /// List every entry whose locator matches a glob
    /// (`*` within a segment, `**` across segments).
    async fn list_assets(&self, pattern: &str) -> Result<Vec<AssetRecord>, StoreError>;

    /// Fetch the catalog record for an id.
    async fn fetch_record(&self, id: &str) -> Result<AssetRecord, StoreError>;

    /// Fetch the importer metadata document for an id.
    async fn fetch_metadata(&self, id: &str) -> Result<serde_json::Value, StoreError>;

    /// Import a file from disk to `target_locator`.
    async fn import_file(
        &self,
        source: &Path,
        target_locator: &str,
        overwrite: bool,
    ) -> Result<(), StoreError>;

    /// Delete all given locators in one call. No per-item result is
    /// reported; missing locators are not an error.
    async fn delete_assets(&self, locators: &[String]) -> Result<(), StoreError>;

    /// Ask the host to show the asset in the OS file browser.
    async fn reveal_in_file_system(&self, locator: &str) -> Result<(), StoreError>;

    /// Replace the metadata document for an id with `content`.
    async fn save_meta(&self, id: &str, content: &str) -> Result<(), StoreError>;
}
