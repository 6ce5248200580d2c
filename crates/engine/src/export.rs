//! Manifest export: collect, enrich, render.

use assetops_core::error::CoreError;
use assetops_core::locator::scope_glob;
use assetops_core::manifest::{render_manifest, ManifestEntry, ManifestFormat};
use assetops_core::types::ManifestExport;
use chrono::Utc;
use futures::future::join_all;

use crate::BatchEngine;

impl BatchEngine {
    /// Export every asset under `scope` as a manifest.
    ///
    /// With `include_metadata`, each entry gets the store's metadata under
    /// `meta`; an entry whose metadata cannot be fetched is kept without it.
    pub async fn export_manifest(
        &self,
        scope: Option<&str>,
        format: ManifestFormat,
        include_metadata: bool,
    ) -> Result<ManifestExport, CoreError> {
        let scope = self.scope_or_default(scope);
        let assets = self.store.list_assets(&scope_glob(scope)).await?;

        let entries = join_all(assets.into_iter().map(|record| async move {
            let meta = if include_metadata {
                match self.store.fetch_metadata(&record.id).await {
                    Ok(meta) => Some(meta),
                    Err(e) => {
                        tracing::debug!(
                            id = %record.id,
                            error = %e,
                            "Metadata unavailable, exporting entry without it",
                        );
                        None
                    }
                }
            } else {
                None
            };
            ManifestEntry::from_record(record, meta)
        }))
        .await;

        let manifest_text = render_manifest(&entries, format)?;
        tracing::info!(scope, asset_count = entries.len(), %format, "Manifest exported");

        Ok(ManifestExport {
            asset_count: entries.len(),
            format: format.as_str().to_string(),
            manifest_text,
            exported_at: Utc::now(),
        })
    }
}
