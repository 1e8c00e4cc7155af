//! Mindset model: a fitted standard scaler followed by a fitted linear classifier.
//!
//! Both artifacts are JSON exports of the trained estimators, read from the
//! model directory at startup:
//!
//! `scaler.json`
//! ```json
//! { "mean": [7.4, 2023.1, 0.8, 3.2, 0.6], "scale": [0.9, 1.2, 1.1, 1.7, 0.7] }
//! ```
//!
//! `mindset_model.json`
//! ```json
//! { "classes": ["Fixed", "Growth"], "coef": [[0.8, 0.1, 0.5, 0.6, 0.3]], "intercept": [-0.2] }
//! ```
//!
//! A single coefficient row with two classes is a binary model (positive score
//! picks the second class). Otherwise there is one row per class and the
//! highest score wins.
//!
//! `AppState` holds the loaded model as `Arc<dyn MindsetClassifier>`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::mindset::features::{MindsetFeatures, FEATURE_COUNT};
use crate::mindset::PredictionError;

pub const SCALER_FILE: &str = "scaler.json";
pub const CLASSIFIER_FILE: &str = "mindset_model.json";

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Anything that can turn assembled features into a mindset label.
pub trait MindsetClassifier: Send + Sync {
    fn predict(&self, features: &MindsetFeatures) -> Result<String, PredictionError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ModelLoadError::Invalid(format!(
                "scaler expects {FEATURE_COUNT} features, has mean {} / scale {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(ModelLoadError::Invalid(
                "scaler parameters must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// `(x - mean) / scale`; a zero scale (constant training column) leaves
    /// the centred value unscaled.
    pub fn transform(&self, x: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut z = [0.0; FEATURE_COUNT];
        for (i, value) in x.iter().enumerate() {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            z[i] = (value - self.mean[i]) / scale;
        }
        z
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifier {
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

impl LinearClassifier {
    fn is_binary(&self) -> bool {
        self.coef.len() == 1 && self.classes.len() == 2
    }

    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.classes.len() < 2 {
            return Err(ModelLoadError::Invalid(
                "classifier needs at least two classes".to_string(),
            ));
        }
        if !self.is_binary() && self.coef.len() != self.classes.len() {
            return Err(ModelLoadError::Invalid(format!(
                "classifier has {} classes but {} coefficient rows",
                self.classes.len(),
                self.coef.len()
            )));
        }
        if self.intercept.len() != self.coef.len() {
            return Err(ModelLoadError::Invalid(format!(
                "classifier has {} coefficient rows but {} intercepts",
                self.coef.len(),
                self.intercept.len()
            )));
        }
        if let Some(row) = self.coef.iter().find(|row| row.len() != FEATURE_COUNT) {
            return Err(ModelLoadError::Invalid(format!(
                "coefficient row has {} weights, expected {FEATURE_COUNT}",
                row.len()
            )));
        }
        Ok(())
    }

    /// One score per coefficient row.
    pub fn decision_function(&self, z: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| row.iter().zip(z).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect()
    }

    pub fn predict(&self, z: &[f64; FEATURE_COUNT]) -> Result<&str, PredictionError> {
        let scores = self.decision_function(z);
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(PredictionError::Model(
                "classifier produced a non-finite score".to_string(),
            ));
        }

        let index = if self.is_binary() {
            usize::from(scores[0] > 0.0)
        } else {
            scores
                .iter()
                .enumerate()
                .fold(0, |best, (i, s)| if *s > scores[best] { i } else { best })
        };
        Ok(&self.classes[index])
    }
}

/// The production classifier: scaler then linear model.
#[derive(Debug, Clone)]
pub struct LinearMindsetModel {
    scaler: StandardScaler,
    classifier: LinearClassifier,
}

impl LinearMindsetModel {
    pub fn new(
        scaler: StandardScaler,
        classifier: LinearClassifier,
    ) -> Result<Self, ModelLoadError> {
        scaler.validate()?;
        classifier.validate()?;
        Ok(Self { scaler, classifier })
    }

    /// Loads `scaler.json` and `mindset_model.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ModelLoadError> {
        let scaler: StandardScaler = read_artifact(&dir.join(SCALER_FILE))?;
        let classifier: LinearClassifier = read_artifact(&dir.join(CLASSIFIER_FILE))?;
        Self::new(scaler, classifier)
    }

    pub fn classes(&self) -> &[String] {
        &self.classifier.classes
    }
}

impl MindsetClassifier for LinearMindsetModel {
    fn predict(&self, features: &MindsetFeatures) -> Result<String, PredictionError> {
        let z = self.scaler.transform(&features.to_vector());
        let label = self.classifier.predict(&z)?;
        debug!("Mindset features {:?} -> {label}", features.to_vector());
        Ok(label.to_string())
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
