use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use super::predictor::ChurnModel;
use crate::domain::customer::CustomerRecord;
use crate::domain::errors::{ConfigurationError, PredictionError};
use crate::domain::ml::field_registry::{self, FieldValue};

/// Artifact envelope version this build understands.
pub const FORMAT_VERSION: u32 = 1;

/// The serialized inference pipeline: preprocessing metadata and the fitted
/// forest stored together as one JSON document.
///
/// The envelope carries everything the pipeline was calibrated with, so none
/// of it is hardcoded here: the external column names in fit order, the
/// ordinal encodings for the categorical columns, and the decision threshold
/// used to turn a score into a class label.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChurnArtifact {
    pub format_version: u32,
    pub feature_names: Vec<String>,
    pub categories: HashMap<String, Vec<String>>,
    pub decision_threshold: f64,
    pub model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl ChurnArtifact {
    /// Deserializes an artifact from disk. A missing, unreadable, or corrupt
    /// file is a `ConfigurationError`; there is no degraded mode.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        if !path.exists() {
            return Err(ConfigurationError::ArtifactNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| ConfigurationError::ArtifactUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact: ChurnArtifact = serde_json::from_reader(BufReader::new(file)).map_err(
            |e| ConfigurationError::ArtifactCorrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        )?;

        if artifact.format_version != FORMAT_VERSION {
            return Err(ConfigurationError::ArtifactCorrupt {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported envelope version {} (expected {})",
                    artifact.format_version, FORMAT_VERSION
                ),
            });
        }

        if !(0.0..=1.0).contains(&artifact.decision_threshold) {
            return Err(ConfigurationError::ArtifactCorrupt {
                path: path.to_path_buf(),
                reason: format!(
                    "decision threshold {} outside [0, 1]",
                    artifact.decision_threshold
                ),
            });
        }

        info!(
            path = %path.display(),
            columns = artifact.feature_names.len(),
            threshold = artifact.decision_threshold,
            "Loaded churn pipeline artifact"
        );

        Ok(artifact)
    }

    /// Encodes a record into the numeric row the forest was fit on, checking
    /// every column name against the envelope. A name mismatch must fail
    /// loudly here rather than silently produce a wrong answer.
    fn encode_row(&self, record: &CustomerRecord) -> Result<Vec<f64>, PredictionError> {
        let fields = field_registry::record_fields(record);

        if self.feature_names.len() != fields.len() {
            return Err(PredictionError::SchemaMismatch {
                reason: format!(
                    "artifact expects {} columns, record has {}",
                    self.feature_names.len(),
                    fields.len()
                ),
            });
        }

        let mut row = Vec::with_capacity(fields.len());
        for (expected, (name, value)) in self.feature_names.iter().zip(fields) {
            if expected != name {
                return Err(PredictionError::SchemaMismatch {
                    reason: format!(
                        "artifact column {expected:?} does not match record field {name:?}"
                    ),
                });
            }

            match value {
                FieldValue::Number(v) => row.push(v),
                FieldValue::Category(v) => {
                    let categories = self.categories.get(name).ok_or_else(|| {
                        PredictionError::SchemaMismatch {
                            reason: format!("artifact has no category table for {name:?}"),
                        }
                    })?;
                    let code = categories.iter().position(|c| c == v).ok_or_else(|| {
                        PredictionError::UnknownCategory {
                            field: name.to_string(),
                            value: v.to_string(),
                        }
                    })?;
                    row.push(code as f64);
                }
            }
        }

        Ok(row)
    }

    fn score(&self, record: &CustomerRecord) -> Result<f64, PredictionError> {
        let row = self.encode_row(record)?;

        let matrix = DenseMatrix::from_2d_vec(&vec![row]).map_err(|e| {
            PredictionError::Inference {
                reason: format!("matrix creation failed: {e}"),
            }
        })?;

        let scores = self
            .model
            .predict(&matrix)
            .map_err(|e| PredictionError::Inference {
                reason: e.to_string(),
            })?;

        let raw = scores.first().copied().ok_or_else(|| PredictionError::Inference {
            reason: "model returned no prediction".to_string(),
        })?;

        // The forest regresses the churn rate; clip numeric drift.
        Ok(raw.clamp(0.0, 1.0))
    }
}

impl ChurnModel for ChurnArtifact {
    fn predict(&self, record: &CustomerRecord) -> Result<u8, PredictionError> {
        let probability = self.score(record)?;
        Ok(u8::from(probability >= self.decision_threshold))
    }

    fn predict_proba(&self, record: &CustomerRecord) -> Result<f64, PredictionError> {
        self.score(record)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest (churn pipeline)"
    }
}
