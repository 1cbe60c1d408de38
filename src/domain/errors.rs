use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving and loading the model artifact.
///
/// These are deployment errors: they are reported once at startup and are
/// terminal for the process. There is no retry path.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("model artifact not found at {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("failed to read model artifact {path}: {source}")]
    ArtifactUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact {path} is corrupt: {reason}")]
    ArtifactCorrupt { path: PathBuf, reason: String },
}

/// Errors raised during a single inference call.
///
/// Non-terminal: the caller reports the message and the session stays
/// interactive. The underlying cause is preserved for display.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("input schema mismatch: {reason}")]
    SchemaMismatch { reason: String },

    #[error("unknown category {value:?} for field {field:?}")]
    UnknownCategory { field: String, value: String },

    #[error("inference failed: {reason}")]
    Inference { reason: String },
}
