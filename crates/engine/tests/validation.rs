//! Integration tests for catalog reference validation.

mod common;

use assert_matches::assert_matches;
use assetops_core::error::CoreError;
use assetops_store::memory::StoreCall;
use assetops_store::InMemoryAssetStore;

use common::{engine_with, record};

#[tokio::test]
async fn empty_scope_reports_zero_counts() {
    let (engine, _) = engine_with(InMemoryAssetStore::new());

    let report = engine.validate_references(None).await.unwrap();

    assert_eq!(report.total_assets, 0);
    assert_eq!(report.valid_references + report.broken_references, 0);
    assert!(report.broken_assets_detail.is_empty());
    assert!(report.summary().contains("No assets found"));
}

/// Broken references are data: they are counted and detailed, and the
/// partition always covers every listed asset.
#[tokio::test]
async fn partitions_valid_and_broken() {
    let store = InMemoryAssetStore::new()
        .with_asset(record("a.png", "1"))
        .with_asset(record("b.png", "2"))
        .with_asset(record("sub/c.png", "3"))
        .with_broken_record("2");
    let (engine, _) = engine_with(store);

    let report = engine.validate_references(None).await.unwrap();

    assert_eq!(report.total_assets, 3);
    assert_eq!(report.valid_references, 2);
    assert_eq!(report.broken_references, 1);
    assert_eq!(
        report.valid_references + report.broken_references,
        report.total_assets
    );

    let broken = &report.broken_assets_detail[0];
    assert_eq!(broken.id, "2");
    assert_eq!(broken.name, "b.png");
    assert_eq!(broken.locator, "db://assets/b.png");
    assert!(!broken.valid);
    assert_eq!(broken.error_message.as_deref(), Some("Asset not found: 2"));
}

/// Every listed asset gets exactly one record fetch, and listing uses the
/// recursive scope pattern.
#[tokio::test]
async fn fetches_each_listed_record_once() {
    let store = InMemoryAssetStore::new()
        .with_asset(record("a.png", "1"))
        .with_asset(record("b.png", "2"));
    let (engine, store) = engine_with(store);

    engine.validate_references(Some("db://assets")).await.unwrap();

    let calls = store.calls().await;
    assert_eq!(calls[0], StoreCall::List("db://assets/**/*".into()));
    let mut fetched: Vec<String> = calls
        .iter()
        .filter_map(|c| match c {
            StoreCall::FetchRecord(id) => Some(id.clone()),
            _ => None,
        })
        .collect();
    fetched.sort();
    assert_eq!(fetched, vec!["1", "2"]);
}

#[tokio::test]
async fn scope_limits_the_listing() {
    let store = InMemoryAssetStore::new()
        .with_asset(record("textures/a.png", "1"))
        .with_asset(record("audio/b.ogg", "2"));
    let (engine, _) = engine_with(store);

    let report = engine
        .validate_references(Some("db://assets/textures"))
        .await
        .unwrap();

    assert_eq!(report.total_assets, 1);
}

#[tokio::test]
async fn listing_failure_fails_validation() {
    let (engine, _) = engine_with(InMemoryAssetStore::new().unavailable("editor not running"));

    let err = engine.validate_references(None).await.unwrap_err();
    assert_matches!(err, CoreError::Store(_));
    assert_eq!(err.to_string(), "Asset store unavailable: editor not running");
}
