//! Manifest entries and their JSON, CSV and XML renderings.
//!
//! Rendering is pure: the engine collects and enriches entries, this
//! module turns them into text. Entry keys keep declaration order, which
//! is also the CSV column order and the XML child-element order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::AssetRecord;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Serialization format for an exported manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestFormat {
    #[default]
    Json,
    Csv,
    Xml,
}

impl ManifestFormat {
    /// Parse a format name. Unknown names fall back to JSON.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => Self::Csv,
            "xml" => Self::Xml,
            _ => Self::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Xml => "xml",
        }
    }

    /// Text of a manifest with no entries.
    pub fn empty_manifest(&self) -> &'static str {
        match self {
            Self::Json => "[]",
            Self::Csv | Self::Xml => "",
        }
    }
}

impl std::fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry in an exported manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub name: String,
    pub locator: String,
    pub id: String,
    pub kind: String,
    pub size_bytes: u64,
    pub is_container: bool,
    /// Store metadata, present only when enrichment ran and succeeded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub meta: Option<Value>,
}

impl ManifestEntry {
    pub fn from_record(record: AssetRecord, meta: Option<Value>) -> Self {
        Self {
            name: record.name,
            locator: record.locator,
            id: record.id,
            kind: record.kind,
            size_bytes: record.size_bytes,
            is_container: record.is_container,
            meta,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render entries in the requested format.
pub fn render_manifest(
    entries: &[ManifestEntry],
    format: ManifestFormat,
) -> Result<String, CoreError> {
    if entries.is_empty() {
        return Ok(format.empty_manifest().to_string());
    }

    match format {
        ManifestFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        ManifestFormat::Csv => Ok(render_csv(&to_rows(entries)?)),
        ManifestFormat::Xml => Ok(render_xml(&to_rows(entries)?)),
    }
}

fn to_rows(entries: &[ManifestEntry]) -> Result<Vec<Map<String, Value>>, CoreError> {
    entries
        .iter()
        .map(|entry| match serde_json::to_value(entry)? {
            Value::Object(map) => Ok(map),
            other => Err(CoreError::Internal(format!(
                "manifest entry serialized to non-object: {other}"
            ))),
        })
        .collect()
}

/// Comma-joined rows under a header taken from the first row's keys.
///
/// Later rows are projected onto that header: keys the first row lacks are
/// dropped, keys it has but a later row lacks render empty. Values are not
/// quoted, so embedded commas are emitted as-is.
fn render_csv(rows: &[Map<String, Value>]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let headers: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| h.as_str())
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        let fields: Vec<String> = headers
            .iter()
            .map(|h| row.get(h.as_str()).map(field_text).unwrap_or_default())
            .collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// `<assets>` document with one `<asset>` element per row.
///
/// Scalar values are escaped; object and array values are inserted as raw
/// JSON text.
// TODO: escape the JSON text of object-valued fields too; a `<` or `&` in
// metadata currently produces malformed XML.
fn render_xml(rows: &[Map<String, Value>]) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        "<assets>".to_string(),
    ];

    for row in rows {
        lines.push("  <asset>".to_string());
        for (key, value) in row {
            let body = match value {
                Value::Object(_) | Value::Array(_) => value.to_string(),
                scalar => xml_escape(&field_text(scalar)),
            };
            lines.push(format!("    <{key}>{body}</{key}>"));
        }
        lines.push("  </asset>".to_string());
    }

    lines.push("</assets>".to_string());
    lines.join("\n")
}

/// Plain-text form of a field value.
fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(_) | Value::Array(_) => value.to_string(),
    }
}

/// Escape `&`, `<` and `>`. Quotes are left alone.
pub fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
