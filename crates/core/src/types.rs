//! Value objects produced and consumed by a single batch operation.
//!
//! Every type here lives for one operation invocation only. Serialized
//! forms use camelCase keys because they travel back to the tool-calling
//! client verbatim.

use serde::{Deserialize, Serialize};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// One catalog entry as returned by an asset store listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Display name, usually the last locator segment.
    pub name: String,
    /// Symbolic locator, e.g. `db://assets/textures/wall.png`.
    pub locator: String,
    /// Opaque store-assigned id.
    pub id: String,
    /// Importer-derived asset kind (`image`, `video`, ...).
    pub kind: String,
    pub size_bytes: u64,
    /// Whether the entry is a folder-like container.
    #[serde(default)]
    pub is_container: bool,
}

/// An identifier resolved to both of its forms.
///
/// Once constructed, `locator` and `id` refer to the same catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAsset {
    pub locator: String,
    pub id: String,
}

// ---------------------------------------------------------------------------
// Locator probing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeOutcome {
    pub original_locator: String,
    pub available_locator: String,
    /// `true` when the requested locator was free on the first attempt.
    pub reused_original: bool,
}

impl ProbeOutcome {
    pub fn summary(&self) -> String {
        if self.reused_original {
            "locator is available".to_string()
        } else {
            "generated new available locator".to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Batch import
// ---------------------------------------------------------------------------

/// Result of importing one discovered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub source_path: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target_locator: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,
}

impl ImportOutcome {
    pub fn imported(source_path: impl Into<String>, target_locator: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            target_locator: Some(target_locator.into()),
            success: true,
            error_message: None,
        }
    }

    pub fn failed(source_path: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            target_locator: None,
            success: false,
            error_message: Some(error_message.into()),
        }
    }
}

/// Aggregate of a batch import run.
///
/// Invariant: `success_count + error_count == total_files == results.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub total_files: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub results: Vec<ImportOutcome>,
}

impl ImportReport {
    /// Build the aggregate from per-file outcomes, keeping their order.
    pub fn from_outcomes(results: Vec<ImportOutcome>) -> Self {
        let success_count = results.iter().filter(|r| r.success).count();
        Self {
            total_files: results.len(),
            success_count,
            error_count: results.len() - success_count,
            results,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Batch import completed: {} succeeded, {} failed",
            self.success_count, self.error_count
        )
    }
}

// ---------------------------------------------------------------------------
// Batch delete
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub locator: String,
    pub success: bool,
}

/// Aggregate of a bulk delete.
///
/// The store confirms only the bulk call, so `error_count` is always zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReport {
    pub total_assets: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub results: Vec<DeleteOutcome>,
}

impl DeleteReport {
    /// Report every requested locator as deleted.
    pub fn optimistic(locators: &[String]) -> Self {
        let results: Vec<DeleteOutcome> = locators
            .iter()
            .map(|locator| DeleteOutcome {
                locator: locator.clone(),
                success: true,
            })
            .collect();

        Self {
            total_assets: results.len(),
            success_count: results.len(),
            error_count: 0,
            results,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Batch delete issued for {} asset(s); the asset store does not confirm \
             individual deletions, so per-asset results cannot be verified",
            self.total_assets
        )
    }
}

// ---------------------------------------------------------------------------
// Reference validation
// ---------------------------------------------------------------------------

/// Classification of one listed asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub locator: String,
    pub id: String,
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,
}

impl ValidationOutcome {
    pub fn valid(asset: &AssetRecord) -> Self {
        Self {
            locator: asset.locator.clone(),
            id: asset.id.clone(),
            name: asset.name.clone(),
            valid: true,
            error_message: None,
        }
    }

    pub fn broken(asset: &AssetRecord, error_message: impl Into<String>) -> Self {
        Self {
            locator: asset.locator.clone(),
            id: asset.id.clone(),
            name: asset.name.clone(),
            valid: false,
            error_message: Some(error_message.into()),
        }
    }
}

/// Partition of a scope into valid and broken references.
///
/// Invariant: `valid_references + broken_references == total_assets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub total_assets: usize,
    pub valid_references: usize,
    pub broken_references: usize,
    pub broken_assets_detail: Vec<ValidationOutcome>,
}

impl ValidationReport {
    pub fn empty() -> Self {
        Self {
            total_assets: 0,
            valid_references: 0,
            broken_references: 0,
            broken_assets_detail: Vec::new(),
        }
    }

    pub fn from_outcomes(outcomes: Vec<ValidationOutcome>) -> Self {
        let total_assets = outcomes.len();
        let broken_assets_detail: Vec<ValidationOutcome> =
            outcomes.into_iter().filter(|o| !o.valid).collect();

        Self {
            total_assets,
            valid_references: total_assets - broken_assets_detail.len(),
            broken_references: broken_assets_detail.len(),
            broken_assets_detail,
        }
    }

    pub fn summary(&self) -> String {
        if self.total_assets == 0 {
            return "No assets found in scope; nothing to validate".to_string();
        }
        format!(
            "Validated {} asset(s): {} valid, {} broken",
            self.total_assets, self.valid_references, self.broken_references
        )
    }
}

// ---------------------------------------------------------------------------
// Manifest export
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestExport {
    pub asset_count: usize,
    /// Format actually rendered (`json` when an unknown one was requested).
    pub format: String,
    pub manifest_text: String,
    pub exported_at: Timestamp,
}

impl ManifestExport {
    pub fn summary(&self) -> String {
        if self.asset_count == 0 {
            return "No assets found in scope; exported an empty manifest".to_string();
        }
        format!("Exported {} asset(s) as {}", self.asset_count, self.format)
    }
}

// ---------------------------------------------------------------------------
// Store readiness
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreReadiness {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,
}

impl StoreReadiness {
    pub fn summary(&self) -> String {
        match &self.error_message {
            None => "Asset store is ready".to_string(),
            Some(err) => format!("Asset store is not ready: {err}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
