//! Integration tests for manifest export.

mod common;

use assetops_core::manifest::ManifestFormat;
use assetops_store::memory::StoreCall;
use assetops_store::InMemoryAssetStore;
use serde_json::{json, Value};

use common::{engine_with, record};

fn populated_store() -> InMemoryAssetStore {
    InMemoryAssetStore::new()
        .with_asset_meta(record("a.png", "1"), Some(json!({"ver": "1.0.0"})))
        .with_asset(record("sub/b.png", "2"))
}

#[tokio::test]
async fn empty_scope_yields_format_specific_empty_text() {
    let (engine, _) = engine_with(InMemoryAssetStore::new());

    for (format, expected) in [
        (ManifestFormat::Json, "[]"),
        (ManifestFormat::Csv, ""),
        (ManifestFormat::Xml, ""),
    ] {
        let export = engine.export_manifest(None, format, true).await.unwrap();
        assert_eq!(export.asset_count, 0);
        assert_eq!(export.manifest_text, expected, "format: {format}");
    }
}

/// The JSON manifest parses back to one entry per listed asset.
#[tokio::test]
async fn json_manifest_matches_listing() {
    let (engine, _) = engine_with(populated_store());

    let export = engine
        .export_manifest(None, ManifestFormat::Json, true)
        .await
        .unwrap();

    assert_eq!(export.format, "json");
    let parsed: Vec<Value> = serde_json::from_str(&export.manifest_text).unwrap();
    assert_eq!(parsed.len(), export.asset_count);
    assert_eq!(parsed[0]["locator"], "db://assets/a.png");
    assert_eq!(parsed[0]["id"], "1");
    assert_eq!(parsed[0]["name"], "a.png");
    assert_eq!(parsed[1]["locator"], "db://assets/sub/b.png");
}

/// Metadata failures drop `meta` for that entry only.
#[tokio::test]
async fn missing_metadata_is_tolerated() {
    let (engine, _) = engine_with(populated_store());

    let export = engine
        .export_manifest(None, ManifestFormat::Json, true)
        .await
        .unwrap();

    let parsed: Vec<Value> = serde_json::from_str(&export.manifest_text).unwrap();
    assert_eq!(parsed[0]["meta"], json!({"ver": "1.0.0"}));
    assert!(parsed[1].get("meta").is_none());
}

#[tokio::test]
async fn metadata_is_skipped_when_not_requested() {
    let (engine, store) = engine_with(populated_store());

    let export = engine
        .export_manifest(None, ManifestFormat::Json, false)
        .await
        .unwrap();

    assert!(!export.manifest_text.contains("\"meta\""));
    assert!(!store
        .calls()
        .await
        .iter()
        .any(|c| matches!(c, StoreCall::FetchMetadata(_))));
}

#[tokio::test]
async fn csv_and_xml_exports() {
    let (engine, _) = engine_with(populated_store());

    let csv = engine
        .export_manifest(None, ManifestFormat::Csv, true)
        .await
        .unwrap();
    let lines: Vec<&str> = csv.manifest_text.lines().collect();
    assert_eq!(lines[0], "name,locator,id,kind,sizeBytes,isContainer,meta");
    assert_eq!(lines.len(), 3);

    let xml = engine
        .export_manifest(None, ManifestFormat::Xml, false)
        .await
        .unwrap();
    assert_eq!(xml.format, "xml");
    assert_eq!(xml.manifest_text.matches("<asset>").count(), 2);
    assert!(xml.manifest_text.contains("<locator>db://assets/sub/b.png</locator>"));
}
