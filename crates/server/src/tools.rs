//! Tool catalog advertised to the client.
//!
//! Each tool has a name, a description and a JSON Schema for its argument
//! object. Two tools are declared but not backed by the asset store; they
//! always fail with a fixed message.

use serde::Serialize;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Tool names
// ---------------------------------------------------------------------------

pub const NORMALIZE_AND_SAVE_META: &str = "normalize_and_save_meta";
pub const PROBE_AVAILABLE_LOCATOR: &str = "probe_available_locator";
pub const CHECK_STORE_READY: &str = "check_store_ready";
pub const REVEAL_ASSET: &str = "reveal_asset";
pub const IMPORT_BATCH: &str = "import_batch";
pub const DELETE_BATCH: &str = "delete_batch";
pub const VALIDATE_REFERENCES: &str = "validate_references";
pub const EXPORT_MANIFEST: &str = "export_manifest";
pub const GET_DEPENDENCY_TREE: &str = "get_dependency_tree";
pub const FIND_UNUSED_ASSETS: &str = "find_unused_assets";

/// All tool names, in catalog order.
pub const ALL_TOOLS: &[&str] = &[
    NORMALIZE_AND_SAVE_META,
    PROBE_AVAILABLE_LOCATOR,
    CHECK_STORE_READY,
    REVEAL_ASSET,
    IMPORT_BATCH,
    DELETE_BATCH,
    VALIDATE_REFERENCES,
    EXPORT_MANIFEST,
    GET_DEPENDENCY_TREE,
    FIND_UNUSED_ASSETS,
];

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// A tool definition for the tools listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON Schema for the tool's argument object.
    pub input_schema: Value,
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn scope_property(default_scope: &str) -> Value {
    json!({
        "type": "string",
        "description": "Locator prefix to restrict the operation to",
        "default": default_scope,
    })
}

/// Every tool, with argument schemas using `default_scope` where a scope
/// may be omitted.
pub fn tool_definitions(default_scope: &str) -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: NORMALIZE_AND_SAVE_META,
            description: "Resolve a locator or id and replace the asset's meta document",
            input_schema: object_schema(
                json!({
                    "locatorOrId": {"type": "string", "description": "db:// locator or asset id"},
                    "content": {"type": "string", "description": "Serialized meta document"},
                }),
                &["locatorOrId", "content"],
            ),
        },
        ToolDefinition {
            name: PROBE_AVAILABLE_LOCATOR,
            description: "Find the first free locator, suffixing -1, -2, ... when taken",
            input_schema: object_schema(
                json!({"locator": {"type": "string", "description": "Desired db:// locator"}}),
                &["locator"],
            ),
        },
        ToolDefinition {
            name: CHECK_STORE_READY,
            description: "Report whether the asset store answers a listing",
            input_schema: object_schema(json!({}), &[]),
        },
        ToolDefinition {
            name: REVEAL_ASSET,
            description: "Show an asset in the OS file browser",
            input_schema: object_schema(
                json!({"locatorOrId": {"type": "string", "description": "db:// locator or asset id"}}),
                &["locatorOrId"],
            ),
        },
        ToolDefinition {
            name: IMPORT_BATCH,
            description: "Import files from a directory one at a time, recording each outcome",
            input_schema: object_schema(
                json!({
                    "sourceDirectory": {"type": "string"},
                    "targetDirectory": {"type": "string", "description": "Target folder locator"},
                    "fileFilter": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "File name suffixes to accept, e.g. [\".png\"]",
                    },
                    "recursive": {"type": "boolean", "default": false},
                    "overwrite": {"type": "boolean", "default": false},
                }),
                &["sourceDirectory", "targetDirectory"],
            ),
        },
        ToolDefinition {
            name: DELETE_BATCH,
            description: "Delete assets in one call; per-asset results are not verifiable",
            input_schema: object_schema(
                json!({"locators": {"type": "array", "items": {"type": "string"}}}),
                &["locators"],
            ),
        },
        ToolDefinition {
            name: VALIDATE_REFERENCES,
            description: "Classify every asset under a scope as valid or broken",
            input_schema: object_schema(
                json!({"scopeLocator": scope_property(default_scope)}),
                &[],
            ),
        },
        ToolDefinition {
            name: EXPORT_MANIFEST,
            description: "Export every asset under a scope as JSON, CSV or XML",
            input_schema: object_schema(
                json!({
                    "scopeLocator": scope_property(default_scope),
                    "format": {"type": "string", "enum": ["json", "csv", "xml"], "default": "json"},
                    "includeMetadata": {"type": "boolean", "default": true},
                }),
                &[],
            ),
        },
        ToolDefinition {
            name: GET_DEPENDENCY_TREE,
            description: "Not supported by the asset store; always fails",
            input_schema: object_schema(json!({}), &[]),
        },
        ToolDefinition {
            name: FIND_UNUSED_ASSETS,
            description: "Not supported by the asset store; always fails",
            input_schema: object_schema(json!({}), &[]),
        },
    ]
}
