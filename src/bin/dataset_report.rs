use car_price::utils::{logger, validation::Validate};
use car_price::{AppConfig, Dataset, DatasetSummary};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "dataset-report")]
#[command(about = "Descriptive summary over the source vehicle dataset")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "car-price.toml")]
    config: String,

    /// Dataset CSV path (overrides the configured one)
    #[arg(short, long)]
    dataset: Option<String>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report {
    generated_at: DateTime<Utc>,
    dataset: String,
    summary: DatasetSummary,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let dataset_path = match &args.dataset {
        Some(path) => path.clone(),
        None => {
            tracing::info!("📁 Loading configuration from: {}", args.config);
            let config = match AppConfig::from_file(&args.config) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
                    eprintln!("💡 Pass --dataset <path> to skip the config file");
                    std::process::exit(1);
                }
            };
            if let Err(e) = config.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
            config.dataset.path
        }
    };

    tracing::info!("📊 Reading dataset: {}", dataset_path);
    let dataset = match Dataset::from_csv_path(&dataset_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let report = Report {
        generated_at: Utc::now(),
        dataset: dataset_path,
        summary: dataset.summary(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let s = &report.summary;
        println!("Dataset report for {}", report.dataset);
        println!("Generated at: {}", report.generated_at.to_rfc3339());
        println!("Records:      {}", s.record_count);
        println!(
            "Price:        min {:.0}, mean {:.0}, max {:.0}",
            s.min_price, s.mean_price, s.max_price
        );
        println!("Mean mileage: {:.0}", s.mean_mileage);
        println!("Years:        {} - {}", s.year_range.0, s.year_range.1);
    }

    Ok(())
}
