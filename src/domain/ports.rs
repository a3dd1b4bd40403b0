use crate::domain::model::{FeatureRow, PredictionResult, VehicleQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Interface over a pre-fitted regression model. Implementations must be
/// deterministic and side-effect-free: the same row always yields the same
/// estimate.
pub trait Predictor: Send + Sync {
    /// Price estimate in EUR for one feature row.
    fn predict(&self, row: &FeatureRow) -> Result<f64>;

    /// Model name/type, for logging.
    fn name(&self) -> &str;
}

#[async_trait]
pub trait PricePipeline: Send + Sync {
    /// Run one submission end to end: validate, assemble the feature row,
    /// invoke the model, convert the currency.
    async fn estimate(&self, query: &VehicleQuery) -> Result<PredictionResult>;
}
