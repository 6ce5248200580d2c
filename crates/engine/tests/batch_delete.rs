//! Integration tests for the optimistic bulk delete.

mod common;

use assert_matches::assert_matches;
use assetops_core::error::CoreError;
use assetops_store::memory::StoreCall;
use assetops_store::InMemoryAssetStore;

use common::{engine_with, record};

#[tokio::test]
async fn empty_list_is_a_successful_no_op() {
    let (engine, store) = engine_with(InMemoryAssetStore::new());

    let report = engine.delete_batch(&[]).await.unwrap();

    assert_eq!(report.total_assets, 0);
    assert_eq!(report.success_count, 0);
    assert_eq!(report.error_count, 0);
    assert_eq!(store.calls().await, vec![StoreCall::Delete(Vec::new())]);
}

/// Locators that never existed are still reported deleted.
#[tokio::test]
async fn every_locator_is_reported_deleted() {
    let (engine, store) = engine_with(InMemoryAssetStore::new().with_asset(record("a.png", "1")));
    let locators = vec![
        "db://assets/a.png".to_string(),
        "db://assets/never-existed.png".to_string(),
    ];

    let report = engine.delete_batch(&locators).await.unwrap();

    assert_eq!(report.total_assets, 2);
    assert_eq!(report.success_count, 2);
    assert_eq!(report.error_count, 0);
    assert!(report.results.iter().all(|r| r.success));
    assert!(!store.contains("db://assets/a.png").await);
}

/// Exactly one bulk call is made with the full list.
#[tokio::test]
async fn single_bulk_call() {
    let (engine, store) = engine_with(InMemoryAssetStore::new());
    let locators = vec!["db://assets/x".to_string(), "db://assets/y".to_string()];

    engine.delete_batch(&locators).await.unwrap();

    assert_eq!(store.calls().await, vec![StoreCall::Delete(locators)]);
}

#[tokio::test]
async fn failing_bulk_call_fails_the_batch() {
    let (engine, _) = engine_with(InMemoryAssetStore::new().with_delete_failure("asset locked"));

    let err = engine
        .delete_batch(&["db://assets/a.png".to_string()])
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::Store(_));
    assert_eq!(err.to_string(), "asset locked");
}
