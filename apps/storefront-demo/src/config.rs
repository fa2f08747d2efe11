//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                   | Values                                  | Default |
//! |----------------------------|-----------------------------------------|---------|
//! | `STOREFRONT_PRICING_MODEL` | `fixed-slot`, `sequential-chain`, `both` | `both`  |
//! | `STOREFRONT_OUTPUT`        | `text`, `json`                          | `text`  |
//! | `STOREFRONT_LOG`           | any `tracing` filter directive          | `info,storefront_core=debug` |
//!
//! `RUST_LOG`, when set, still wins over `STOREFRONT_LOG`.

use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront_core=debug";

/// Which demonstration scenarios to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    FixedSlot,
    SequentialChain,
    #[default]
    Both,
}

impl PricingModel {
    pub fn includes_fixed_slot(&self) -> bool {
        matches!(self, PricingModel::FixedSlot | PricingModel::Both)
    }

    pub fn includes_sequential_chain(&self) -> bool {
        matches!(self, PricingModel::SequentialChain | PricingModel::Both)
    }
}

impl FromStr for PricingModel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed-slot" => Ok(PricingModel::FixedSlot),
            "sequential-chain" => Ok(PricingModel::SequentialChain),
            "both" => Ok(PricingModel::Both),
            _ => Err(()),
        }
    }
}

/// How the final statistics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// Demo configuration.
#[derive(Debug, Clone, Serialize)]
pub struct DemoConfig {
    /// Scenarios to run
    pub pricing_model: PricingModel,

    /// Statistics output format
    pub output: OutputFormat,

    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            pricing_model: PricingModel::default(),
            output: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DemoConfig::default();

        let pricing_model = match lookup("STOREFRONT_PRICING_MODEL") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_PRICING_MODEL".to_string()))?,
            None => defaults.pricing_model,
        };

        let output = match lookup("STOREFRONT_OUTPUT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_OUTPUT".to_string()))?,
            None => defaults.output,
        };

        let log_filter = lookup("STOREFRONT_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(DemoConfig {
            pricing_model,
            output,
            log_filter,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.pricing_model, PricingModel::Both);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_filter, "info,storefront_core=debug");
    }

    #[test]
    fn test_values_are_parsed() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_PRICING_MODEL", "Sequential-Chain"),
            ("STOREFRONT_OUTPUT", "json"),
            ("STOREFRONT_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.pricing_model, PricingModel::SequentialChain);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let err = DemoConfig::from_lookup(lookup_from(&[("STOREFRONT_OUTPUT", "xml")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOREFRONT_OUTPUT");
    }

    #[test]
    fn test_model_selection() {
        assert!(PricingModel::Both.includes_fixed_slot());
        assert!(PricingModel::Both.includes_sequential_chain());
        assert!(!PricingModel::FixedSlot.includes_sequential_chain());
        assert!(!PricingModel::SequentialChain.includes_fixed_slot());
    }
}
