use crate::utils::format::format_with_dots;
use serde::{Deserialize, Serialize};

/// A code into one of the category registries. Carries no meaning on its own,
/// only through the registry lookup.
pub type CategoryCode = u8;

/// One prediction request as entered by the user. Built fresh per submission
/// and dropped once the response has been rendered; nothing is persisted.
///
/// The numeric fields keep the form's idle convention: 0 means "not provided".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleQuery {
    pub model: CategoryCode,
    pub year: u32,
    pub transmission: CategoryCode,
    pub mileage: f64,
    pub fuel_type: CategoryCode,
    pub tax: f64,
    pub mpg: f64,
    pub engine_size: f64,
}

/// The one-row tabular input the regression model was trained on. Fixed shape,
/// fixed column order, categorical attributes carried as raw codes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    pub model: f64,
    pub year: f64,
    pub transmission: f64,
    pub mileage: f64,
    pub fuel_type: f64,
    pub tax: f64,
    pub mpg: f64,
    pub engine_size: f64,
}

impl FeatureRow {
    /// Column names in training order.
    pub const COLUMNS: [&'static str; 8] = [
        "model",
        "year",
        "transmission",
        "mileage",
        "fuelType",
        "tax",
        "mpg",
        "engineSize",
    ];

    pub fn from_query(query: &VehicleQuery) -> Self {
        Self {
            model: query.model as f64,
            year: query.year as f64,
            transmission: query.transmission as f64,
            mileage: query.mileage,
            fuel_type: query.fuel_type as f64,
            tax: query.tax,
            mpg: query.mpg,
            engine_size: query.engine_size,
        }
    }

    /// The row values in [`FeatureRow::COLUMNS`] order.
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.model,
            self.year,
            self.transmission,
            self.mileage,
            self.fuel_type,
            self.tax,
            self.mpg,
            self.engine_size,
        ]
    }
}

/// A finished estimate: the model's output in EUR plus the derived IDR value.
/// Ephemeral, one per submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub price_eur: f64,
    pub price_idr: f64,
}

impl PredictionResult {
    pub fn formatted_eur(&self) -> String {
        format_with_dots(self.price_eur)
    }

    pub fn formatted_idr(&self) -> String {
        format_with_dots(self.price_idr)
    }

    /// The confirmation sentence shown under the two estimates.
    pub fn conclusion(&self) -> String {
        format!(
            "Conclusion: based on the data above, the estimated resale price is Rp {}.",
            self.formatted_idr()
        )
    }
}
