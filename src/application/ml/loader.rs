use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use super::smartcore_model::ChurnArtifact;
use crate::domain::errors::ConfigurationError;

/// Process-wide cache around the model artifact.
///
/// Guarantees at most one deserialization per process, even when the first
/// calls race from several sessions: the cell is double-checked under an init
/// mutex. A failed load is never cached, so every caller of a missing
/// artifact sees the same `ConfigurationError` rather than a half-built
/// model.
pub struct ModelCache {
    path: PathBuf,
    cell: OnceLock<Arc<ChurnArtifact>>,
    init_lock: Mutex<()>,
    loads: AtomicUsize,
}

impl ModelCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
            init_lock: Mutex::new(()),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of times the artifact file was actually deserialized.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Returns the cached artifact, loading it on first use.
    pub fn get(&self) -> Result<Arc<ChurnArtifact>, ConfigurationError> {
        if let Some(artifact) = self.cell.get() {
            return Ok(Arc::clone(artifact));
        }

        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Another session may have finished the load while we waited.
        if let Some(artifact) = self.cell.get() {
            return Ok(Arc::clone(artifact));
        }

        let artifact = Arc::new(ChurnArtifact::load(&self.path)?);
        self.loads.fetch_add(1, Ordering::SeqCst);
        let _ = self.cell.set(Arc::clone(&artifact));

        Ok(artifact)
    }
}
