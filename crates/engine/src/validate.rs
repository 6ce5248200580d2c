//! Catalog reference validation.
//!
//! Lists a scope, fetches every listed record by id, and partitions the
//! listing into valid and broken references. Fetches are issued together
//! and the partition is computed once all of them have resolved.

use assetops_core::error::CoreError;
use assetops_core::locator::scope_glob;
use assetops_core::types::{ValidationOutcome, ValidationReport};
use futures::future::join_all;

use crate::BatchEngine;

impl BatchEngine {
    pub async fn validate_references(
        &self,
        scope: Option<&str>,
    ) -> Result<ValidationReport, CoreError> {
        let scope = self.scope_or_default(scope);
        let assets = self.store.list_assets(&scope_glob(scope)).await?;

        if assets.is_empty() {
            tracing::info!(scope, "No assets to validate");
            return Ok(ValidationReport::empty());
        }

        let checks = assets.iter().map(|asset| async move {
            match self.store.fetch_record(&asset.id).await {
                Ok(_) => ValidationOutcome::valid(asset),
                Err(e) => ValidationOutcome::broken(asset, e.to_string()),
            }
        });
        let report = ValidationReport::from_outcomes(join_all(checks).await);

        tracing::info!(
            scope,
            total_assets = report.total_assets,
            broken_references = report.broken_references,
            "Reference validation completed",
        );
        Ok(report)
    }
}
