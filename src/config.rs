use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// Per-unit price assumed for items the price table does not know.
    #[serde(default = "default_price")]
    pub default_price: f64,
    /// Optional path to a JSON price table (item name -> quote).
    #[serde(default)]
    pub price_table: Option<String>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_price: default_price(),
            price_table: None,
        }
    }
}

fn default_price() -> f64 {
    3.00
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Risk weighting scheme: "detailed" or "screening".
    #[serde(default = "default_weight_profile")]
    pub weight_profile: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weight_profile: default_weight_profile(),
        }
    }
}

fn default_weight_profile() -> String {
    "detailed".to_string()
}

impl Config {
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "pantrysense.toml".to_string());

        // Config file is optional; defaults cover everything
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (PANTRYSENSE__PRICING__DEFAULT_PRICE, etc.)
        builder = builder.add_source(
            Environment::with_prefix("PANTRYSENSE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.pricing.default_price < 0.0 {
            return Err("Default price must not be negative".to_string());
        }
        if !matches!(
            self.analysis.weight_profile.as_str(),
            "detailed" | "screening"
        ) {
            return Err(format!(
                "Unknown weight profile '{}': expected 'detailed' or 'screening'",
                self.analysis.weight_profile
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pricing.default_price, 3.00);
        assert_eq!(config.analysis.weight_profile, "detailed");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_validation_negative_price() {
        let mut config = Config::default();
        config.pricing.default_price = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_weight_profile() {
        let mut config = Config::default();
        config.analysis.weight_profile = "mystery".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("mystery"));
    }
}
