use crate::domain::model::VehicleQuery;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command-line front end for one prediction request. Numeric fields default
/// to 0, mirroring the form's idle state: the pipeline treats a literal zero
/// in a guarded field as "not provided".
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "car-price")]
#[command(about = "Used Toyota price estimator backed by a pre-trained regression model")]
pub struct CliConfig {
    /// Path to the trained model artifact
    #[arg(long, default_value = "LinearRegressionModel.bin")]
    pub artifact: String,

    /// Car model code (see --list-codes)
    #[arg(long, default_value = "0")]
    pub model: u8,

    /// Year of manufacture
    #[arg(long, default_value = "0")]
    pub year: u32,

    /// Transmission code (see --list-codes)
    #[arg(long, default_value = "0")]
    pub transmission: u8,

    /// Mileage in kilometers
    #[arg(long, default_value = "0")]
    pub mileage: f64,

    /// Fuel type code (see --list-codes)
    #[arg(long, default_value = "0")]
    pub fuel_type: u8,

    /// Road tax in EUR
    #[arg(long, default_value = "0")]
    pub tax: f64,

    /// Fuel consumption
    #[arg(long, default_value = "0")]
    pub mpg: f64,

    /// Engine size in liters
    #[arg(long, default_value = "0")]
    pub engine_size: f64,

    /// Print the category code registries and exit
    #[arg(long)]
    pub list_codes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable system monitoring
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    pub fn query(&self) -> VehicleQuery {
        VehicleQuery {
            model: self.model,
            year: self.year,
            transmission: self.transmission,
            mileage: self.mileage,
            fuel_type: self.fuel_type,
            tax: self.tax,
            mpg: self.mpg,
            engine_size: self.engine_size,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("artifact", &self.artifact)
    }
}
