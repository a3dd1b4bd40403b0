pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::dataset::{Dataset, DatasetSummary, VehicleRecord};
pub use adapters::linear_model::LinearModel;
pub use config::AppConfig;
pub use core::{engine::PredictionEngine, pipeline::PredictionPipeline};
pub use domain::model::{FeatureRow, PredictionResult, VehicleQuery};
pub use domain::ports::{PricePipeline, Predictor};
pub use utils::error::{PriceError, Result};
