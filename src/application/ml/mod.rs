pub mod loader;
pub mod predictor;
pub mod smartcore_model;
