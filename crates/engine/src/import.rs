//! Batch import from a source directory.
//!
//! Files are imported one at a time, in discovery order, each call awaited
//! before the next starts. The store's import call is not assumed safe to
//! run concurrently.

use std::path::PathBuf;

use assetops_core::error::CoreError;
use assetops_core::locator::import_target;
use assetops_core::scanner::discover_files;
use assetops_core::types::{ImportOutcome, ImportReport};

use crate::BatchEngine;

/// Parameters of one batch import.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub source_directory: PathBuf,
    /// Folder locator the files land in.
    pub target_locator: String,
    /// Case-insensitive name suffixes; empty accepts every file.
    pub file_filter: Vec<String>,
    pub recursive: bool,
    pub overwrite: bool,
}

impl BatchEngine {
    /// Import every matching file under the source directory.
    ///
    /// A missing source directory fails the call before the store is
    /// touched. Per-file failures are recorded and the batch carries on.
    pub async fn import_batch(&self, request: ImportRequest) -> Result<ImportReport, CoreError> {
        let ImportRequest {
            source_directory,
            target_locator,
            file_filter,
            recursive,
            overwrite,
        } = request;

        let files = tokio::task::spawn_blocking(move || {
            discover_files(&source_directory, &file_filter, recursive)
        })
        .await
        .map_err(|e| CoreError::Internal(format!("file discovery task failed: {e}")))??;

        tracing::info!(
            target_locator = %target_locator,
            files = files.len(),
            recursive,
            overwrite,
            "Starting batch import",
        );

        let mut results = Vec::with_capacity(files.len());
        for path in files {
            let source_path = path.display().to_string();
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let target = import_target(&target_locator, &file_name);

            let outcome = match self.store.import_file(&path, &target, overwrite).await {
                Ok(()) => ImportOutcome::imported(source_path, target),
                Err(e) => {
                    tracing::warn!(source = %source_path, error = %e, "File import failed");
                    ImportOutcome::failed(source_path, e.to_string())
                }
            };
            results.push(outcome);
        }

        let report = ImportReport::from_outcomes(results);
        tracing::info!(
            total_files = report.total_files,
            success_count = report.success_count,
            error_count = report.error_count,
            "Batch import completed",
        );
        Ok(report)
    }
}
