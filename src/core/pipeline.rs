use crate::core::currency;
use crate::core::registry::{FUEL_TYPES, MODELS, TRANSMISSIONS};
use crate::core::{FeatureRow, PredictionResult, PricePipeline, Predictor, VehicleQuery};
use crate::utils::error::{PriceError, Result};

/// The prediction request pipeline: validate → assemble → predict → convert.
///
/// The predictor is injected at composition time; the pipeline holds no other
/// state, so every submission is independent of the ones before it.
pub struct PredictionPipeline<P: Predictor> {
    predictor: P,
}

impl<P: Predictor> PredictionPipeline<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    /// Gate a query before any model work happens.
    ///
    /// The form's numeric fields idle at 0, so a literal zero in any of the
    /// five guarded fields means "not yet provided" and the whole submission
    /// is rejected. Category codes are additionally checked against their
    /// registries; the form constrains them by construction, but this is an
    /// API surface too.
    pub fn validate(&self, query: &VehicleQuery) -> Result<()> {
        let mut missing = Vec::new();
        if query.year == 0 {
            missing.push("year");
        }
        if query.mileage == 0.0 {
            missing.push("mileage");
        }
        if query.tax == 0.0 {
            missing.push("tax");
        }
        if query.mpg == 0.0 {
            missing.push("mpg");
        }
        if query.engine_size == 0.0 {
            missing.push("engineSize");
        }
        if !missing.is_empty() {
            return Err(PriceError::IncompleteInput { missing });
        }

        MODELS.validate(query.model)?;
        TRANSMISSIONS.validate(query.transmission)?;
        FUEL_TYPES.validate(query.fuel_type)?;
        Ok(())
    }

    /// Pure, total transformation of a validated query into the model's row
    /// shape.
    pub fn assemble(&self, query: &VehicleQuery) -> FeatureRow {
        FeatureRow::from_query(query)
    }
}

#[async_trait::async_trait]
impl<P: Predictor> PricePipeline for PredictionPipeline<P> {
    async fn estimate(&self, query: &VehicleQuery) -> Result<PredictionResult> {
        tracing::debug!("Validating query: {:?}", query);
        self.validate(query)?;

        let row = self.assemble(query);
        tracing::debug!("Assembled feature row: {:?}", row.as_array());

        let price_eur = self.predictor.predict(&row)?;
        tracing::debug!("Model '{}' returned {} EUR", self.predictor.name(), price_eur);

        let price_idr = currency::eur_to_idr(price_eur);

        Ok(PredictionResult {
            price_eur,
            price_idr,
        })
    }
}
