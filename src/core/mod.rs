pub mod currency;
pub mod engine;
pub mod pipeline;
pub mod registry;

pub use crate::domain::model::{FeatureRow, PredictionResult, VehicleQuery};
pub use crate::domain::ports::{PricePipeline, Predictor};
pub use crate::utils::error::Result;
