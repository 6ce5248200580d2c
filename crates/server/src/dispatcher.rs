//! Routes a tool name and its JSON arguments to the engine.
//!
//! Every call ends in exactly one [`OperationResult`]; argument decoding
//! errors, engine errors and unknown tools all become failure envelopes.

use std::path::PathBuf;
use std::sync::Arc;

use assetops_core::envelope::OperationResult;
use assetops_core::manifest::ManifestFormat;
use assetops_engine::{BatchEngine, ImportRequest};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{DispatchError, DispatchResult};
use crate::tools::{self, ToolDefinition};

// ---------------------------------------------------------------------------
// Argument objects
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveMetaArgs {
    locator_or_id: String,
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProbeArgs {
    locator: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RevealArgs {
    locator_or_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportArgs {
    source_directory: PathBuf,
    target_directory: String,
    #[serde(default)]
    file_filter: Vec<String>,
    #[serde(default)]
    recursive: bool,
    #[serde(default)]
    overwrite: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteArgs {
    locators: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateArgs {
    scope_locator: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportArgs {
    scope_locator: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default = "default_true")]
    include_metadata: bool,
}

fn default_true() -> bool {
    true
}

/// Decode an argument object; a missing (`null`) object reads as `{}`.
fn parse_args<T: DeserializeOwned>(tool: &'static str, arguments: Value) -> DispatchResult<T> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|source| DispatchError::InvalidArguments { tool, source })
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

pub struct ToolDispatcher {
    engine: Arc<BatchEngine>,
}

impl ToolDispatcher {
    pub fn new(engine: Arc<BatchEngine>) -> Self {
        Self { engine }
    }

    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        tools::tool_definitions(&self.engine.config().default_scope)
    }

    /// Run one tool call and wrap the outcome in an envelope.
    pub async fn dispatch(&self, tool: &str, arguments: Value) -> OperationResult {
        match self.route(tool, arguments).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool, error = %e, "Tool call failed");
                e.into()
            }
        }
    }

    async fn route(&self, tool: &str, arguments: Value) -> DispatchResult<OperationResult> {
        let engine = &self.engine;

        let result = match tool {
            tools::NORMALIZE_AND_SAVE_META => {
                let args: SaveMetaArgs = parse_args(tools::NORMALIZE_AND_SAVE_META, arguments)?;
                let asset = engine
                    .normalize_and_save_meta(&args.locator_or_id, &args.content)
                    .await?;
                OperationResult::from_report(&asset, "Meta saved")?
            }
            tools::PROBE_AVAILABLE_LOCATOR => {
                let args: ProbeArgs = parse_args(tools::PROBE_AVAILABLE_LOCATOR, arguments)?;
                let outcome = engine.probe_available_locator(&args.locator).await?;
                OperationResult::from_report(&outcome, outcome.summary())?
            }
            tools::CHECK_STORE_READY => {
                let readiness = engine.check_store_ready().await;
                OperationResult::from_report(&readiness, readiness.summary())?
            }
            tools::REVEAL_ASSET => {
                let args: RevealArgs = parse_args(tools::REVEAL_ASSET, arguments)?;
                let asset = engine.reveal_asset(&args.locator_or_id).await?;
                OperationResult::from_report(&asset, "Asset revealed in file system")?
            }
            tools::IMPORT_BATCH => {
                let args: ImportArgs = parse_args(tools::IMPORT_BATCH, arguments)?;
                let report = engine
                    .import_batch(ImportRequest {
                        source_directory: args.source_directory,
                        target_locator: args.target_directory,
                        file_filter: args.file_filter,
                        recursive: args.recursive,
                        overwrite: args.overwrite,
                    })
                    .await?;
                OperationResult::from_report(&report, report.summary())?
            }
            tools::DELETE_BATCH => {
                let args: DeleteArgs = parse_args(tools::DELETE_BATCH, arguments)?;
                let report = engine.delete_batch(&args.locators).await?;
                OperationResult::from_report(&report, report.summary())?
            }
            tools::VALIDATE_REFERENCES => {
                let args: ValidateArgs = parse_args(tools::VALIDATE_REFERENCES, arguments)?;
                let report = engine
                    .validate_references(args.scope_locator.as_deref())
                    .await?;
                OperationResult::from_report(&report, report.summary())?
            }
            tools::EXPORT_MANIFEST => {
                let args: ExportArgs = parse_args(tools::EXPORT_MANIFEST, arguments)?;
                let format = ManifestFormat::parse(args.format.as_deref().unwrap_or_default());
                let export = engine
                    .export_manifest(
                        args.scope_locator.as_deref(),
                        format,
                        args.include_metadata,
                    )
                    .await?;
                OperationResult::from_report(&export, export.summary())?
            }
            // Arguments are ignored; the store backs neither query.
            tools::GET_DEPENDENCY_TREE => return Err(engine.dependency_tree().into()),
            tools::FIND_UNUSED_ASSETS => return Err(engine.unused_assets().into()),
            other => return Err(DispatchError::UnknownTool(other.to_string())),
        };

        tracing::debug!(tool, "Tool call succeeded");
        Ok(result)
    }
}
