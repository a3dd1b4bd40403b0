use car_price::Dataset;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_CSV: &str = "\
model,year,transmission,mileage,fuelType,tax,mpg,engineSize,price
1,2018,0,25000,0,150,55.4,1.6,12500
0,2016,1,43000,3,265,36.2,2.0,16000
5,2019,0,5000,0,145,56.5,1.0,10250
";

#[test]
fn test_load_dataset_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

    let dataset = Dataset::from_csv_path(file.path()).unwrap();
    assert_eq!(dataset.len(), 3);

    let first = &dataset.records()[0];
    assert_eq!(first.model, 1);
    assert_eq!(first.year, 2018);
    assert_eq!(first.fuel_type, 0);
    assert_eq!(first.engine_size, 1.6);
    assert_eq!(first.price, 12500.0);

    // camelCase headers map onto the snake_case fields
    let second = &dataset.records()[1];
    assert_eq!(second.fuel_type, 3);
    assert_eq!(second.engine_size, 2.0);
}

#[test]
fn test_dataset_summary_over_csv() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

    let dataset = Dataset::from_csv_path(file.path()).unwrap();
    let summary = dataset.summary();

    assert_eq!(summary.record_count, 3);
    assert_eq!(summary.min_price, 10250.0);
    assert_eq!(summary.max_price, 16000.0);
    assert_eq!(summary.mean_price, (12500.0 + 16000.0 + 10250.0) / 3.0);
    assert_eq!(summary.year_range, (2016, 2019));
}

#[test]
fn test_missing_dataset_file_is_an_error() {
    assert!(Dataset::from_csv_path("no/such/file.csv").is_err());
}

#[test]
fn test_malformed_row_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"model,year,transmission,mileage,fuelType,tax,mpg,engineSize,price\n1,not-a-year,0,1,0,1,1,1,1\n",
    )
    .unwrap();

    assert!(Dataset::from_csv_path(file.path()).is_err());
}
