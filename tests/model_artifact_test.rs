use car_price::{
    FeatureRow, LinearModel, PredictionPipeline, PriceError, PricePipeline, Predictor,
    VehicleQuery,
};
use tempfile::TempDir;

fn eight_coefficient_model() -> LinearModel {
    LinearModel {
        intercept: 500.0,
        coefficients: vec![10.0, 2.0, -5.0, -0.125, 3.0, 1.0, 0.0, 0.0],
    }
}

#[test]
fn test_artifact_save_load_predict() {
    let temp_dir = TempDir::new().unwrap();
    let artifact_path = temp_dir.path().join("linreg.bin");

    eight_coefficient_model().save(&artifact_path).unwrap();
    let loaded = LinearModel::load(&artifact_path).unwrap();

    let row = FeatureRow {
        model: 1.0,
        year: 2018.0,
        transmission: 0.0,
        mileage: 25000.0,
        fuel_type: 0.0,
        tax: 150.0,
        mpg: 55.4,
        engine_size: 1.6,
    };

    // 500 + 10 + 4036 + 0 - 3125 + 0 + 150 + 0 + 0; every term is exact in f64
    assert_eq!(loaded.predict(&row).unwrap(), 1571.0);
}

#[test]
fn test_corrupt_artifact_fails_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let artifact_path = temp_dir.path().join("corrupt.bin");
    std::fs::write(&artifact_path, b"definitely not a model").unwrap();

    assert!(LinearModel::load(&artifact_path).is_err());
}

#[test]
fn test_missing_artifact_fails_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let artifact_path = temp_dir.path().join("nope.bin");

    assert!(matches!(
        LinearModel::load(&artifact_path).unwrap_err(),
        PriceError::IoError(_)
    ));
}

#[test]
fn test_wrong_column_count_loads_but_fails_at_first_predict() {
    let temp_dir = TempDir::new().unwrap();
    let artifact_path = temp_dir.path().join("three_columns.bin");

    LinearModel {
        intercept: 0.0,
        coefficients: vec![1.0, 2.0, 3.0],
    }
    .save(&artifact_path)
    .unwrap();

    // No schema check at load time.
    let loaded = LinearModel::load(&artifact_path).unwrap();

    let query = VehicleQuery {
        model: 1,
        year: 2018,
        transmission: 0,
        mileage: 25000.0,
        fuel_type: 0,
        tax: 150.0,
        mpg: 55.4,
        engine_size: 1.6,
    };
    let row = FeatureRow::from_query(&query);

    assert!(matches!(
        loaded.predict(&row).unwrap_err(),
        PriceError::PredictionError { .. }
    ));
}

#[tokio::test]
async fn test_pipeline_with_real_artifact_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let artifact_path = temp_dir.path().join("linreg.bin");

    LinearModel {
        intercept: 10000.0,
        coefficients: vec![0.0; 8],
    }
    .save(&artifact_path)
    .unwrap();

    let model = LinearModel::load(&artifact_path).unwrap();
    let pipeline = PredictionPipeline::new(model);

    let query = VehicleQuery {
        model: 1,
        year: 2018,
        transmission: 0,
        mileage: 25000.0,
        fuel_type: 0,
        tax: 150.0,
        mpg: 55.4,
        engine_size: 1.6,
    };

    let result = pipeline.estimate(&query).await.unwrap();
    assert_eq!(result.formatted_eur(), "10.000");
    assert_eq!(result.formatted_idr(), "167.410.000");
}
