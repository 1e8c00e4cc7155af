//! Mindset prediction: five form values in, one categorical label out.
//!
//! The scaler and classifier are trained elsewhere and loaded once at
//! startup; this module only runs inference.

pub mod features;
pub mod handlers;
pub mod model;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid input format: {field} must be {expected}, got '{value}'")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Model error: {0}")]
    Model(String),
}
