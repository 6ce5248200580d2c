//! Bulk delete.

use assetops_core::error::CoreError;
use assetops_core::types::DeleteReport;

use crate::BatchEngine;

impl BatchEngine {
    /// Delete all locators with a single store call.
    ///
    /// The store reports only whether the bulk call went through, so every
    /// locator is reported deleted. Only the call itself failing fails the
    /// batch.
    pub async fn delete_batch(&self, locators: &[String]) -> Result<DeleteReport, CoreError> {
        self.store.delete_assets(locators).await?;
        tracing::info!(total_assets = locators.len(), "Batch delete issued");
        Ok(DeleteReport::optimistic(locators))
    }
}
