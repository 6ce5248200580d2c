//! Integration tests for identifier normalization, locator probing,
//! reveal and save-meta.

mod common;

use assert_matches::assert_matches;
use assetops_core::error::CoreError;
use assetops_engine::EngineConfig;
use assetops_store::memory::StoreCall;
use assetops_store::InMemoryAssetStore;
use serde_json::json;

use common::{engine_with, engine_with_config, record};

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// A locator and its id normalize to the same pair from either side.
#[tokio::test]
async fn normalization_round_trip() {
    let (engine, _) = engine_with(InMemoryAssetStore::new().with_asset(record("a.png", "id-a")));

    let from_locator = engine.normalize("db://assets/a.png").await.unwrap();
    assert_eq!(from_locator.id, "id-a");

    let from_id = engine.normalize("id-a").await.unwrap();
    assert_eq!(from_id.locator, "db://assets/a.png");
    assert_eq!(from_id, from_locator);
}

/// A locator is resolved with a locator lookup, an id with an id lookup.
#[tokio::test]
async fn normalization_queries_the_needed_direction() {
    let (engine, store) =
        engine_with(InMemoryAssetStore::new().with_asset(record("a.png", "id-a")));

    engine.normalize("db://assets/a.png").await.unwrap();
    engine.normalize("id-a").await.unwrap();

    assert_eq!(
        store.calls().await,
        vec![
            StoreCall::LookupId("db://assets/a.png".into()),
            StoreCall::LookupLocator("id-a".into()),
        ]
    );
}

/// The store's lookup error surfaces unmodified.
#[tokio::test]
async fn normalization_failure_carries_store_message() {
    let (engine, _) = engine_with(InMemoryAssetStore::new());

    let err = engine.normalize("db://assets/missing.png").await.unwrap_err();
    assert_matches!(err, CoreError::Store(_));
    assert_eq!(err.to_string(), "Asset not found: db://assets/missing.png");
}

#[tokio::test]
async fn empty_identifier_is_rejected_without_store_call() {
    let (engine, store) = engine_with(InMemoryAssetStore::new());

    assert_matches!(engine.normalize("").await, Err(CoreError::InvalidArgument(_)));
    assert!(store.calls().await.is_empty());
}

// ---------------------------------------------------------------------------
// Probing
// ---------------------------------------------------------------------------

/// A free locator is returned as-is after exactly one lookup.
#[tokio::test]
async fn probe_reuses_free_locator_with_one_lookup() {
    let (engine, store) = engine_with(InMemoryAssetStore::new());

    let outcome = engine
        .probe_available_locator("db://assets/new.png")
        .await
        .unwrap();

    assert!(outcome.reused_original);
    assert_eq!(outcome.available_locator, "db://assets/new.png");
    assert_eq!(outcome.summary(), "locator is available");
    assert_eq!(store.calls().await.len(), 1);
}

/// Taken locators are skipped by suffixing before the extension.
#[tokio::test]
async fn probe_generates_suffixed_locator() {
    let store = InMemoryAssetStore::new()
        .with_asset(record("a.png", "1"))
        .with_asset(record("a-1.png", "2"));
    let (engine, store) = engine_with(store);

    let outcome = engine
        .probe_available_locator("db://assets/a.png")
        .await
        .unwrap();

    assert!(!outcome.reused_original);
    assert_eq!(outcome.original_locator, "db://assets/a.png");
    assert_eq!(outcome.available_locator, "db://assets/a-2.png");
    assert_eq!(outcome.summary(), "generated new available locator");
    assert_eq!(
        store.calls().await,
        vec![
            StoreCall::LookupId("db://assets/a.png".into()),
            StoreCall::LookupId("db://assets/a-1.png".into()),
            StoreCall::LookupId("db://assets/a-2.png".into()),
        ]
    );
}

/// Probing stops after the bound with at most bound + 1 lookups.
#[tokio::test]
async fn probe_is_bounded() {
    let mut store = InMemoryAssetStore::new().with_asset(record("folder", "f0"));
    for n in 1..=3 {
        store = store.with_asset(record(&format!("folder-{n}"), &format!("f{n}")));
    }
    let config = EngineConfig {
        probe_max_attempts: 3,
        ..EngineConfig::default()
    };
    let (engine, store) = engine_with_config(store, config);

    let err = engine
        .probe_available_locator("db://assets/folder")
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::ProbeExhausted { attempts: 3, .. });
    assert_eq!(
        err.to_string(),
        "No available locator for db://assets/folder after 3 suffixed candidates"
    );
    assert_eq!(store.calls().await.len(), 4);
}

/// With the default bound, a fully occupied range exhausts after 101 lookups.
#[tokio::test]
async fn probe_default_bound_is_one_hundred() {
    let mut store = InMemoryAssetStore::new().with_asset(record("a.png", "0"));
    for n in 1..=100 {
        store = store.with_asset(record(&format!("a-{n}.png"), &n.to_string()));
    }
    let (engine, store) = engine_with(store);

    assert_matches!(
        engine.probe_available_locator("db://assets/a.png").await,
        Err(CoreError::ProbeExhausted { attempts: 100, .. })
    );
    assert_eq!(store.calls().await.len(), 101);
}

// ---------------------------------------------------------------------------
// Reveal and save-meta
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reveal_by_id_reveals_locator() {
    let (engine, store) = engine_with(InMemoryAssetStore::new().with_asset(record("a.png", "1")));

    let asset = engine.reveal_asset("1").await.unwrap();
    assert_eq!(asset.locator, "db://assets/a.png");
    assert_eq!(store.revealed().await, vec!["db://assets/a.png".to_string()]);
}

#[tokio::test]
async fn save_meta_writes_to_normalized_id() {
    let (engine, store) = engine_with(InMemoryAssetStore::new().with_asset(record("a.png", "1")));

    let asset = engine
        .normalize_and_save_meta("db://assets/a.png", r#"{"userData":{"tag":"hero"}}"#)
        .await
        .unwrap();

    assert_eq!(asset.id, "1");
    assert_eq!(
        store.metadata("1").await,
        Some(json!({"userData": {"tag": "hero"}}))
    );
}

#[tokio::test]
async fn save_meta_on_unknown_asset_fails_before_write() {
    let (engine, store) = engine_with(InMemoryAssetStore::new());

    assert_matches!(
        engine.normalize_and_save_meta("ghost", "{}").await,
        Err(CoreError::Store(_))
    );
    assert_eq!(store.calls().await, vec![StoreCall::LookupLocator("ghost".into())]);
}

// ---------------------------------------------------------------------------
// Unsupported capabilities
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unsupported_queries_are_errors_without_store_calls() {
    let (engine, store) = engine_with(InMemoryAssetStore::new().with_asset(record("a.png", "1")));

    assert_matches!(engine.dependency_tree(), CoreError::Unsupported(msg) if msg.contains("dependency"));
    assert_matches!(engine.unused_assets(), CoreError::Unsupported(msg) if msg.contains("reference"));
    assert!(store.calls().await.is_empty());
}
