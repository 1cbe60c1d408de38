mod common;

use churnscope::application::ml::loader::ModelCache;
use churnscope::domain::errors::ConfigurationError;
use std::sync::Arc;

#[test]
fn loader_returns_same_cached_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_artifact(dir.path(), &common::fixture_artifact(0.5));

    let cache = ModelCache::new(path);

    let first = cache.get().unwrap();
    let second = cache.get().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.load_count(), 1);
}

#[test]
fn concurrent_first_calls_load_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_artifact(dir.path(), &common::fixture_artifact(0.5));

    let cache = ModelCache::new(path);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                cache.get().unwrap();
            });
        }
    });

    assert_eq!(cache.load_count(), 1);
}

#[test]
fn missing_artifact_is_configuration_error_every_time() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ModelCache::new(dir.path().join("nope.json"));

    for _ in 0..2 {
        let err = cache.get().unwrap_err();
        assert!(matches!(err, ConfigurationError::ArtifactNotFound { .. }));
    }

    // A failed load never populates the cache
    assert_eq!(cache.load_count(), 0);
}

#[test]
fn corrupt_artifact_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("churn_pipeline.json");
    std::fs::write(&path, b"not a model").unwrap();

    let cache = ModelCache::new(path);

    let err = cache.get().unwrap_err();
    assert!(matches!(err, ConfigurationError::ArtifactCorrupt { .. }));
    assert_eq!(cache.load_count(), 0);
}
