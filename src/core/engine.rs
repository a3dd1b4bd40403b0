use crate::core::{PredictionResult, PricePipeline, VehicleQuery};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through one submission with stage logging and optional
/// system monitoring.
pub struct PredictionEngine<P: PricePipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: PricePipeline> PredictionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self, query: &VehicleQuery) -> Result<PredictionResult> {
        tracing::info!("Processing prediction request...");
        self.monitor.log_stats("Start");

        let result = self.pipeline.estimate(query).await?;

        tracing::info!(
            "Estimate: {} EUR / {} IDR",
            result.formatted_eur(),
            result.formatted_idr()
        );
        self.monitor.log_stats("Prediction complete");

        Ok(result)
    }
}
