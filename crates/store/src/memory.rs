//! In-process asset store.
//!
//! Keeps the catalog in a `BTreeMap` keyed by locator behind a
//! `tokio::sync::RwLock`, so concurrent read calls (listing, record and
//! metadata fetches) proceed in parallel while mutating calls serialize.
//!
//! Besides serving the stdio server, the store supports failure injection
//! and keeps a journal of every call it receives, which tests use to check
//! call counts and ordering.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use assetops_core::types::AssetRecord;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

use crate::glob::glob_to_regex;
use crate::kind::derive_kind;
use crate::{AssetStore, StoreError};

// ---------------------------------------------------------------------------
// Call journal
// ---------------------------------------------------------------------------

/// One call received by the store, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    LookupId(String),
    LookupLocator(String),
    List(String),
    FetchRecord(String),
    FetchMetadata(String),
    Import { source: PathBuf, target: String },
    Delete(Vec<String>),
    Reveal(String),
    SaveMeta(String),
}

// ---------------------------------------------------------------------------
// Catalog state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct StoredAsset {
    record: AssetRecord,
    meta: Option<Value>,
}

#[derive(Debug, Default)]
struct CatalogState {
    assets: BTreeMap<String, StoredAsset>,
    /// Ids whose record fetch fails although they still list.
    broken_ids: HashSet<String>,
    /// File name -> message for imports the store refuses.
    rejected_imports: HashMap<String, String>,
    delete_failure: Option<String>,
    unavailable: Option<String>,
    revealed: Vec<String>,
}

impl CatalogState {
    fn ensure_available(&self) -> Result<(), StoreError> {
        match &self.unavailable {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn find_by_id(&self, id: &str) -> Option<&StoredAsset> {
        self.assets.values().find(|a| a.record.id == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut StoredAsset> {
        self.assets.values_mut().find(|a| a.record.id == id)
    }
}

/// Entry of a catalog seed file: an asset record plus optional metadata.
#[derive(Debug, Deserialize)]
struct SeedAsset {
    #[serde(flatten)]
    record: AssetRecord,
    #[serde(default)]
    meta: Option<Value>,
}

// ---------------------------------------------------------------------------
// InMemoryAssetStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InMemoryAssetStore {
    state: RwLock<CatalogState>,
    journal: Mutex<Vec<StoreCall>>,
}

impl InMemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON array of asset records. Each element may
    /// carry an extra `meta` object.
    pub async fn from_seed_file(path: &Path) -> Result<Self, StoreError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let seed: Vec<SeedAsset> =
            serde_json::from_str(&text).map_err(|e| StoreError::InvalidSeed(e.to_string()))?;

        tracing::info!(path = %path.display(), assets = seed.len(), "Catalog seed loaded");

        Ok(seed.into_iter().fold(Self::new(), |store, entry| {
            store.with_asset_meta(entry.record, entry.meta)
        }))
    }

    // ---- builders ----

    pub fn with_asset(self, record: AssetRecord) -> Self {
        self.with_asset_meta(record, None)
    }

    pub fn with_asset_meta(mut self, record: AssetRecord, meta: Option<Value>) -> Self {
        self.state
            .get_mut()
            .assets
            .insert(record.locator.clone(), StoredAsset { record, meta });
        self
    }

    /// Keep the asset listed but make its record fetch fail.
    pub fn with_broken_record(mut self, id: impl Into<String>) -> Self {
        self.state.get_mut().broken_ids.insert(id.into());
        self
    }

    /// Refuse imports of any file with this name.
    pub fn with_rejected_import(
        mut self,
        file_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.state
            .get_mut()
            .rejected_imports
            .insert(file_name.into(), message.into());
        self
    }

    /// Make the bulk delete call fail.
    pub fn with_delete_failure(mut self, message: impl Into<String>) -> Self {
        self.state.get_mut().delete_failure = Some(message.into());
        self
    }

    /// Make every call fail as if the store were not running.
    pub fn unavailable(mut self, reason: impl Into<String>) -> Self {
        self.state.get_mut().unavailable = Some(reason.into());
        self
    }

    // ---- inspection ----

    /// Every call received so far, oldest first.
    pub async fn calls(&self) -> Vec<StoreCall> {
        self.journal.lock().await.clone()
    }

    pub async fn contains(&self, locator: &str) -> bool {
        self.state.read().await.assets.contains_key(locator)
    }

    pub async fn record(&self, locator: &str) -> Option<AssetRecord> {
        self.state
            .read()
            .await
            .assets
            .get(locator)
            .map(|a| a.record.clone())
    }

    pub async fn metadata(&self, id: &str) -> Option<Value> {
        self.state
            .read()
            .await
            .find_by_id(id)
            .and_then(|a| a.meta.clone())
    }

    pub async fn revealed(&self) -> Vec<String> {
        self.state.read().await.revealed.clone()
    }

    async fn note(&self, call: StoreCall) {
        self.journal.lock().await.push(call);
    }
}

#[async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn lookup_id_by_locator(&self, locator: &str) -> Result<String, StoreError> {
        self.note(StoreCall::LookupId(locator.to_string())).await;
        let state = self.state.read().await;
        state.ensure_available()?;
        state
            .assets
            .get(locator)
            .map(|a| a.record.id.clone())
            .ok_or_else(|| StoreError::NotFound(locator.to_string()))
    }

    async fn lookup_locator_by_id(&self, id: &str) -> Result<String, StoreError> {
        self.note(StoreCall::LookupLocator(id.to_string())).await;
        let state = self.state.read().await;
        state.ensure_available()?;
        state
            .find_by_id(id)
            .map(|a| a.record.locator.clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list_assets(&self, pattern: &str) -> Result<Vec<AssetRecord>, StoreError> {
        self.note(StoreCall::List(pattern.to_string())).await;
        let state = self.state.read().await;
        state.ensure_available()?;
        let matcher = glob_to_regex(pattern)?;
        Ok(state
            .assets
            .values()
            .filter(|a| matcher.is_match(&a.record.locator))
            .map(|a| a.record.clone())
            .collect())
    }

    async fn fetch_record(&self, id: &str) -> Result<AssetRecord, StoreError> {
        self.note(StoreCall::FetchRecord(id.to_string())).await;
        let state = self.state.read().await;
        state.ensure_available()?;
        if state.broken_ids.contains(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        state
            .find_by_id(id)
            .map(|a| a.record.clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn fetch_metadata(&self, id: &str) -> Result<Value, StoreError> {
        self.note(StoreCall::FetchMetadata(id.to_string())).await;
        let state = self.state.read().await;
        state.ensure_available()?;
        state
            .find_by_id(id)
            .and_then(|a| a.meta.clone())
            .ok_or_else(|| StoreError::NotFound(format!("metadata for {id}")))
    }

    async fn import_file(
        &self,
        source: &Path,
        target_locator: &str,
        overwrite: bool,
    ) -> Result<(), StoreError> {
        self.note(StoreCall::Import {
            source: source.to_path_buf(),
            target: target_locator.to_string(),
        })
        .await;

        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        {
            let state = self.state.read().await;
            state.ensure_available()?;
            if let Some(message) = state.rejected_imports.get(&file_name) {
                return Err(StoreError::Rejected(message.clone()));
            }
        }

        let metadata = tokio::fs::metadata(source)
            .await
            .map_err(|err| StoreError::Io {
                path: source.display().to_string(),
                source: err,
            })?;

        let mut state = self.state.write().await;
        let existing_id = match state.assets.get(target_locator) {
            Some(_) if !overwrite => {
                return Err(StoreError::AlreadyExists(target_locator.to_string()))
            }
            Some(existing) => Some(existing.record.id.clone()),
            None => None,
        };

        let record = AssetRecord {
            name: file_name.clone(),
            locator: target_locator.to_string(),
            id: existing_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            kind: derive_kind(&file_name).to_string(),
            size_bytes: metadata.len(),
            is_container: false,
        };
        tracing::debug!(locator = %record.locator, id = %record.id, "Asset imported");
        state
            .assets
            .insert(record.locator.clone(), StoredAsset { record, meta: None });
        Ok(())
    }

    async fn delete_assets(&self, locators: &[String]) -> Result<(), StoreError> {
        self.note(StoreCall::Delete(locators.to_vec())).await;
        let mut state = self.state.write().await;
        state.ensure_available()?;
        if let Some(message) = &state.delete_failure {
            return Err(StoreError::Rejected(message.clone()));
        }

        for locator in locators {
            let child_prefix = format!("{locator}/");
            state
                .assets
                .retain(|key, _| key != locator && !key.starts_with(&child_prefix));
        }
        Ok(())
    }

    async fn reveal_in_file_system(&self, locator: &str) -> Result<(), StoreError> {
        self.note(StoreCall::Reveal(locator.to_string())).await;
        let mut state = self.state.write().await;
        state.ensure_available()?;
        if !state.assets.contains_key(locator) {
            return Err(StoreError::NotFound(locator.to_string()));
        }
        state.revealed.push(locator.to_string());
        Ok(())
    }

    async fn save_meta(&self, id: &str, content: &str) -> Result<(), StoreError> {
        self.note(StoreCall::SaveMeta(id.to_string())).await;
        let meta: Value = serde_json::from_str(content)
            .map_err(|e| StoreError::Rejected(format!("Invalid meta content: {e}")))?;

        let mut state = self.state.write().await;
        state.ensure_available()?;
        let asset = state
            .find_by_id_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        asset.meta = Some(meta);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
