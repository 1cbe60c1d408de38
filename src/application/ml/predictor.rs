use crate::domain::customer::CustomerRecord;
use crate::domain::errors::PredictionError;

/// Interface to the loaded churn classification pipeline.
///
/// Implementations must be immutable after construction; the handle is shared
/// by reference across sessions and calls require no locking.
pub trait ChurnModel: Send + Sync {
    /// Class label for one record: 1 = churn, 0 = no churn.
    fn predict(&self, record: &CustomerRecord) -> Result<u8, PredictionError>;

    /// Probability of the churn class, in [0.0, 1.0].
    fn predict_proba(&self, record: &CustomerRecord) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
