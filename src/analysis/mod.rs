//! Measurement orchestration, interpretation and run history

/// Explicit collection of measurement records
pub mod history;
/// Tier labels for metric values
pub mod interpret;
/// Unified configuration and measurement entry point
pub mod pipeline;

pub use history::{RunHistory, RunRecord};
pub use pipeline::{FractalMeasurement, Measurement, MeasurementConfig, Pipeline, measure};
