use std::sync::Arc;
use tracing::info;

use crate::application::ml::predictor::ChurnModel;
use crate::domain::customer::{ChurnLabel, CustomerRecord};
use crate::domain::errors::PredictionError;

/// Outcome of one inference call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: ChurnLabel,
    pub probability: f64,
}

/// Stateless bridge between the form and the loaded pipeline: one record in,
/// one `(label, probability)` pair out. Any failure inside the artifact is
/// caught at this boundary and surfaced with its message; it never takes the
/// session down.
pub struct InferenceService {
    model: Arc<dyn ChurnModel>,
}

impl InferenceService {
    pub fn new(model: Arc<dyn ChurnModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn run(&self, record: &CustomerRecord) -> Result<Prediction, PredictionError> {
        let class = self.model.predict(record)?;
        let probability = self.model.predict_proba(record)?;

        info!(
            model = self.model.name(),
            class,
            probability,
            "Churn inference completed"
        );

        Ok(Prediction {
            label: ChurnLabel::from_class(class),
            probability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedModel {
        probability: f64,
        threshold: f64,
    }

    impl ChurnModel for FixedModel {
        fn predict(&self, _record: &CustomerRecord) -> Result<u8, PredictionError> {
            Ok(u8::from(self.probability >= self.threshold))
        }

        fn predict_proba(&self, _record: &CustomerRecord) -> Result<f64, PredictionError> {
            Ok(self.probability)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingModel;

    impl ChurnModel for FailingModel {
        fn predict(&self, _record: &CustomerRecord) -> Result<u8, PredictionError> {
            Err(PredictionError::Inference {
                reason: "synthetic failure".to_string(),
            })
        }

        fn predict_proba(&self, _record: &CustomerRecord) -> Result<f64, PredictionError> {
            Err(PredictionError::Inference {
                reason: "synthetic failure".to_string(),
            })
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_label_follows_model_threshold() {
        let service = InferenceService::new(Arc::new(FixedModel {
            probability: 0.42,
            threshold: 0.3,
        }));

        let prediction = service.run(&CustomerRecord::default()).unwrap();
        assert_eq!(prediction.label, ChurnLabel::Churned);
        assert!((prediction.probability - 0.42).abs() < f64::EPSILON);
    }

    #[test]
    fn test_below_threshold_is_retained() {
        let service = InferenceService::new(Arc::new(FixedModel {
            probability: 0.42,
            threshold: 0.5,
        }));

        let prediction = service.run(&CustomerRecord::default()).unwrap();
        assert_eq!(prediction.label, ChurnLabel::Retained);
    }

    #[test]
    fn test_model_failure_surfaces_with_message() {
        let service = InferenceService::new(Arc::new(FailingModel));

        let err = service.run(&CustomerRecord::default()).unwrap_err();
        assert!(err.to_string().contains("synthetic failure"));
    }
}
