//! Identifier normalization and locator probing.

use assetops_core::error::CoreError;
use assetops_core::locator::{candidate_locator, is_locator_free, Identifier};
use assetops_core::types::{NormalizedAsset, ProbeOutcome};

use crate::BatchEngine;

impl BatchEngine {
    /// Resolve a locator or an id to both forms.
    ///
    /// A failing store lookup fails the whole normalization with the
    /// store's message.
    pub async fn normalize(&self, identifier: &str) -> Result<NormalizedAsset, CoreError> {
        if identifier.is_empty() {
            return Err(CoreError::InvalidArgument(
                "identifier must not be empty".to_string(),
            ));
        }

        match Identifier::classify(identifier) {
            Identifier::Locator(locator) => {
                let id = self.store.lookup_id_by_locator(locator).await?;
                Ok(NormalizedAsset {
                    locator: locator.to_string(),
                    id,
                })
            }
            Identifier::Id(id) => {
                let locator = self.store.lookup_locator_by_id(id).await?;
                Ok(NormalizedAsset {
                    locator,
                    id: id.to_string(),
                })
            }
        }
    }

    /// Find the first free locator starting from `desired`.
    ///
    /// Tries `desired` itself, then `name-1.ext` through
    /// `name-N.ext` where N is the configured attempt bound, so at most
    /// N + 1 lookups are made.
    pub async fn probe_available_locator(&self, desired: &str) -> Result<ProbeOutcome, CoreError> {
        if desired.is_empty() {
            return Err(CoreError::InvalidArgument(
                "locator must not be empty".to_string(),
            ));
        }

        let max_attempts = self.config.probe_max_attempts;
        for attempt in 0..=max_attempts {
            let candidate = candidate_locator(desired, attempt);
            let lookup = self.store.lookup_id_by_locator(&candidate).await;

            if is_locator_free(&lookup) {
                tracing::debug!(desired, candidate = %candidate, attempt, "Free locator found");
                return Ok(ProbeOutcome {
                    original_locator: desired.to_string(),
                    available_locator: candidate,
                    reused_original: attempt == 0,
                });
            }
        }

        tracing::warn!(desired, max_attempts, "Locator probing exhausted");
        Err(CoreError::ProbeExhausted {
            locator: desired.to_string(),
            attempts: max_attempts,
        })
    }

    /// Normalize, then write `content` as the asset's metadata document.
    pub async fn normalize_and_save_meta(
        &self,
        identifier: &str,
        content: &str,
    ) -> Result<NormalizedAsset, CoreError> {
        let asset = self.normalize(identifier).await?;
        self.store.save_meta(&asset.id, content).await?;
        tracing::info!(locator = %asset.locator, id = %asset.id, "Asset meta saved");
        Ok(asset)
    }

    /// Normalize, then ask the store to show the asset in the file browser.
    pub async fn reveal_asset(&self, identifier: &str) -> Result<NormalizedAsset, CoreError> {
        let asset = self.normalize(identifier).await?;
        self.store.reveal_in_file_system(&asset.locator).await?;
        Ok(asset)
    }
}
