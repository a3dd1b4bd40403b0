use car_price::core::registry::{FUEL_TYPES, MODELS, TRANSMISSIONS};
use car_price::utils::{logger, validation::Validate};
use car_price::{CliConfig, LinearModel, PredictionEngine, PredictionPipeline};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting car-price CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list_codes {
        for registry in [MODELS, TRANSMISSIONS, FUEL_TYPES] {
            println!("{}: {}", registry.field(), registry.choices());
        }
        return Ok(());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // The model artifact is loaded exactly once; if it cannot be read the
    // whole feature is unusable, so bail out here.
    let model = match LinearModel::load(&config.artifact) {
        Ok(model) => model,
        Err(e) => {
            tracing::error!("❌ Failed to load model artifact '{}': {}", config.artifact, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    let query = config.query();
    let pipeline = PredictionPipeline::new(model);
    let engine = PredictionEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run(&query).await {
        Ok(result) => {
            println!("Estimated price (EUR): {}", result.formatted_eur());
            println!("Estimated price (IDR): {}", result.formatted_idr());
            println!("✅ {}", result.conclusion());
        }
        Err(e) => {
            tracing::warn!("Prediction not performed: {}", e);
            eprintln!("⚠️ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                car_price::utils::error::ErrorSeverity::Low => 0,
                car_price::utils::error::ErrorSeverity::Medium => 2,
                car_price::utils::error::ErrorSeverity::High => 1,
                car_price::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
