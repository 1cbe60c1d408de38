use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Artifact location when `MODEL_PATH` is not set.
pub const DEFAULT_MODEL_PATH: &str = "models/churn_pipeline.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Filesystem path of the serialized churn pipeline. Constant for the
    /// life of the process.
    pub model_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_model_path(env::var("MODEL_PATH").ok())
    }

    pub(crate) fn from_model_path(raw: Option<String>) -> Result<Self> {
        let model_path = match raw {
            Some(value) if value.trim().is_empty() => {
                anyhow::bail!("MODEL_PATH is set but empty")
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_MODEL_PATH),
        };

        Ok(Config { model_path })
    }
}
