use crate::domain::model::CategoryCode;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of the source dataset the charting screens draw from. The
/// categorical columns hold the encoded values the model was trained on;
/// headers keep the file's camelCase names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub model: CategoryCode,
    pub year: u32,
    pub transmission: CategoryCode,
    pub mileage: f64,
    #[serde(rename = "fuelType")]
    pub fuel_type: CategoryCode,
    pub tax: f64,
    pub mpg: f64,
    #[serde(rename = "engineSize")]
    pub engine_size: f64,
    pub price: f64,
}

/// In-memory copy of the dataset CSV. Read fresh from storage on every load;
/// never cached and never shared with the prediction pipeline.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<VehicleRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub mean_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub mean_mileage: f64,
    pub year_range: (u32, u32),
}

impl Dataset {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(&path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: VehicleRecord = row?;
            records.push(record);
        }
        tracing::debug!(
            "Loaded {} records from {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(Self { records })
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Descriptive statistics over the whole file. Empty datasets summarize
    /// to zeros rather than NaN.
    pub fn summary(&self) -> DatasetSummary {
        if self.records.is_empty() {
            return DatasetSummary {
                record_count: 0,
                mean_price: 0.0,
                min_price: 0.0,
                max_price: 0.0,
                mean_mileage: 0.0,
                year_range: (0, 0),
            };
        }

        let count = self.records.len() as f64;
        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        let mut price_sum = 0.0;
        let mut mileage_sum = 0.0;
        let mut min_year = u32::MAX;
        let mut max_year = 0;

        for record in &self.records {
            price_sum += record.price;
            mileage_sum += record.mileage;
            min_price = min_price.min(record.price);
            max_price = max_price.max(record.price);
            min_year = min_year.min(record.year);
            max_year = max_year.max(record.year);
        }

        DatasetSummary {
            record_count: self.records.len(),
            mean_price: price_sum / count,
            min_price,
            max_price,
            mean_mileage: mileage_sum / count,
            year_range: (min_year, max_year),
        }
    }
}
