use crate::utils::error::{PriceError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application-level configuration from a TOML file, used by the reporting
/// binary. Supports `${VAR}` environment-variable substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub model: ModelConfig,
    pub dataset: DatasetConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub artifact_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PriceError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| PriceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the environment value; unknown variables
    /// are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();
        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("application.name", &self.application.name)?;
        validate_path("model.artifact_path", &self.model.artifact_path)?;
        validate_path("dataset.path", &self.dataset.path)?;
        validate_file_extension("dataset.path", &self.dataset.path, &["csv"])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_CONFIG: &str = r#"
[application]
name = "car-price"
description = "Used car price estimator"

[model]
artifact_path = "models/linreg.bin"

[dataset]
path = "data/toyota.csv"

[monitoring]
enabled = true
"#;

    #[test]
    fn test_parse_basic_config() {
        let config = AppConfig::from_toml_str(BASIC_CONFIG).unwrap();
        assert_eq!(config.application.name, "car-price");
        assert_eq!(config.model.artifact_path, "models/linreg.bin");
        assert_eq!(config.dataset.path, "data/toyota.csv");
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_monitoring_defaults_off() {
        let content = r#"
[application]
name = "car-price"

[model]
artifact_path = "models/linreg.bin"

[dataset]
path = "data/toyota.csv"
"#;
        let config = AppConfig::from_toml_str(content).unwrap();
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CAR_PRICE_TEST_DATASET", "data/from_env.csv");
        let content = r#"
[application]
name = "car-price"

[model]
artifact_path = "models/linreg.bin"

[dataset]
path = "${CAR_PRICE_TEST_DATASET}"
"#;
        let config = AppConfig::from_toml_str(content).unwrap();
        assert_eq!(config.dataset.path, "data/from_env.csv");
        std::env::remove_var("CAR_PRICE_TEST_DATASET");
    }

    #[test]
    fn test_validation_rejects_non_csv_dataset() {
        let content = r#"
[application]
name = "car-price"

[model]
artifact_path = "models/linreg.bin"

[dataset]
path = "data/toyota.parquet"
"#;
        let config = AppConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC_CONFIG.as_bytes()).unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.application.name, "car-price");
    }
}
