//! Shared fixture: a small churn artifact fit on synthetic customers.

#![allow(dead_code)]

use churnscope::application::ml::smartcore_model::{ChurnArtifact, FORMAT_VERSION};
use churnscope::domain::customer::{CardType, CustomerRecord, Gender, Geography};
use churnscope::domain::ml::field_registry::{self, FIELD_NAMES, FieldValue};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub fn default_categories() -> HashMap<String, Vec<String>> {
    HashMap::from([
        (
            "Geography".to_string(),
            Geography::ALL.iter().map(|g| g.as_str().to_string()).collect(),
        ),
        (
            "Gender".to_string(),
            Gender::ALL.iter().map(|g| g.as_str().to_string()).collect(),
        ),
        (
            "Card Type".to_string(),
            CardType::ALL.iter().map(|c| c.as_str().to_string()).collect(),
        ),
    ])
}

fn encode(record: &CustomerRecord, categories: &HashMap<String, Vec<String>>) -> Vec<f64> {
    field_registry::record_fields(record)
        .into_iter()
        .map(|(name, value)| match value {
            FieldValue::Number(v) => v,
            FieldValue::Category(v) => categories[name]
                .iter()
                .position(|c| c == v)
                .expect("fixture category") as f64,
        })
        .collect()
}

/// Synthetic customers where complaints, inactivity, and low satisfaction
/// mark the churners. The other columns vary deterministically so the forest
/// sees a spread of values.
pub fn training_set() -> (Vec<CustomerRecord>, Vec<f64>) {
    let mut records = Vec::new();
    let mut labels = Vec::new();

    for i in 0..40u32 {
        records.push(CustomerRecord {
            credit_score: 380 + i * 9,
            geography: Geography::ALL[(i % 3) as usize],
            gender: Gender::ALL[(i % 2) as usize],
            age: 30 + (i % 40),
            tenure: i % 11,
            balance: 20_000.0 + f64::from(i) * 4_000.0,
            num_of_products: 1 + (i % 2),
            has_cr_card: i % 3 != 0,
            is_active_member: false,
            estimated_salary: 25_000.0 + f64::from(i) * 3_500.0,
            complain: true,
            satisfaction_score: 1 + (i % 2),
            card_type: CardType::ALL[(i % 4) as usize],
            point_earned: 200 + i * 150,
        });
        labels.push(1.0);
    }

    for i in 0..40u32 {
        records.push(CustomerRecord {
            credit_score: 520 + i * 8,
            geography: Geography::ALL[((i + 1) % 3) as usize],
            gender: Gender::ALL[((i + 1) % 2) as usize],
            age: 22 + (i % 45),
            tenure: (i + 3) % 11,
            balance: 40_000.0 + f64::from(i) * 5_000.0,
            num_of_products: 2 + (i % 3),
            has_cr_card: i % 4 != 0,
            is_active_member: true,
            estimated_salary: 45_000.0 + f64::from(i) * 4_200.0,
            complain: false,
            satisfaction_score: 4 + (i % 2),
            card_type: CardType::ALL[((i + 2) % 4) as usize],
            point_earned: 3_000 + i * 300,
        });
        labels.push(0.0);
    }

    (records, labels)
}

/// Fits a small forest and wraps it in an envelope with the given threshold.
pub fn fixture_artifact(decision_threshold: f64) -> ChurnArtifact {
    let categories = default_categories();
    let (records, labels) = training_set();

    let rows: Vec<Vec<f64>> = records.iter().map(|r| encode(r, &categories)).collect();
    let x = DenseMatrix::from_2d_vec(&rows).expect("fixture matrix");

    // m = all columns so every tree can split on the dominant signal
    let params = RandomForestRegressorParameters::default()
        .with_n_trees(32)
        .with_m(FIELD_NAMES.len())
        .with_seed(7);
    let model = RandomForestRegressor::fit(&x, &labels, params).expect("fixture fit");

    ChurnArtifact {
        format_version: FORMAT_VERSION,
        feature_names: FIELD_NAMES.iter().map(|s| s.to_string()).collect(),
        categories,
        decision_threshold,
        model,
    }
}

pub fn write_artifact(dir: &Path, artifact: &ChurnArtifact) -> PathBuf {
    let path = dir.join("churn_pipeline.json");
    std::fs::write(&path, serde_json::to_vec(artifact).expect("serialize artifact"))
        .expect("write artifact");
    path
}
