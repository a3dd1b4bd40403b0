use crate::domain::model::FeatureRow;
use crate::domain::ports::Predictor;
use crate::utils::error::{PriceError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pre-fitted linear regression, deserialized from an opaque binary artifact.
///
/// Loaded once at process start and immutable afterwards. There is no schema
/// check at load time: an artifact trained on the wrong column count only
/// fails at the first prediction call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(&path)?;
        let model: LinearModel = bincode::deserialize(&bytes)?;
        tracing::debug!(
            "Loaded linear model from {} ({} coefficients)",
            path.as_ref().display(),
            model.coefficients.len()
        );
        Ok(model)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = bincode::serialize(self)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, row: &FeatureRow) -> Result<f64> {
        let features = row.as_array();
        if self.coefficients.len() != features.len() {
            return Err(PriceError::PredictionError {
                message: format!(
                    "artifact has {} coefficients, feature row has {} columns",
                    self.coefficients.len(),
                    features.len()
                ),
            });
        }

        let estimate = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.iter())
                .map(|(c, x)| c * x)
                .sum::<f64>();
        Ok(estimate)
    }

    fn name(&self) -> &str {
        "linear-regression"
    }
}
