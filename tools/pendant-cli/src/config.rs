//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use pendant_builder::catalog::PricingCatalog;
use pendant_builder::config::BuilderConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["pendant.toml", ".pendant.toml", "pendant.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Pricing, checkout and catalog settings passed to the builder.
    #[serde(flatten)]
    pub builder: BuilderConfig,

    /// Replay settings.
    #[serde(default)]
    pub replay: ReplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config: {}", path))
    }

    /// Parse config text, JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        let config = if json {
            serde_json::from_str(content)?
        } else {
            toml::from_str(content)?
        };
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Replay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Directory submitted orders are written to when no `--output` is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    "orders".to_string()
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Load a catalog file, JSON or TOML by extension.
pub fn load_catalog(path: &Path) -> Result<PricingCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    parse_catalog(&content, is_json)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))
}

/// Parse catalog text and reject negative prices.
pub fn parse_catalog(content: &str, json: bool) -> Result<PricingCatalog> {
    let catalog = if json {
        PricingCatalog::from_json_str(content)?
    } else {
        let catalog: PricingCatalog = toml::from_str(content)?;
        catalog.validate()?;
        catalog
    };
    Ok(catalog)
}

/// Generate a default pendant.toml config file.
pub fn generate_default_config() -> String {
    r#"# Pendant builder configuration

# Replace the built-in price list with a TOML or JSON catalog.
# catalog = "catalog.toml"

[pricing]
currency = "USD"
included_colors = 2
diamond_rate = 25
default_chain_size = "16"

[checkout]
quantity = 1
success_url = "https://minimoria.webflow.io/build/success"
cancel_url = "https://minimoria.webflow.io/build/error"

[replay]
output_dir = "orders"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pendant_builder::money::Currency;
    use pendant_builder::options::{ChainSize, Material, PendantKind};

    #[test]
    fn test_default_config_parses() {
        let config = CliConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config.builder.pricing.diamond_rate, 25);
        assert_eq!(config.builder.pricing.default_chain_size, ChainSize::In16);
        assert_eq!(config.builder.catalog, None);
        assert_eq!(config.replay.output_dir, "orders");
        assert!(config.builder.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("", false).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            r#"{"catalog": "prices.json", "pricing": {"currency": "GBP"}, "replay": {"output_dir": "out"}}"#,
            true,
        )
        .unwrap();
        assert_eq!(config.builder.catalog.as_deref(), Some("prices.json"));
        assert_eq!(config.builder.pricing.currency, Currency::GBP);
        assert_eq!(config.replay.output_dir, "out");
    }

    #[test]
    fn test_toml_catalog() {
        let catalog = parse_catalog(
            r#"
            [pendants.2d_enamel.silver_925]
            base = 140
            extra_color = 10

            [chains.silver_925]
            16 = 25
            18 = 25
            "#,
            false,
        )
        .unwrap();
        assert_eq!(
            catalog
                .pendant_price(&PendantKind::TwoDEnamel, &Material::Silver925)
                .map(|p| p.base),
            Some(140)
        );
        assert_eq!(
            catalog.chain_price(&Material::Silver925, &ChainSize::In18),
            Some(25)
        );
    }

    #[test]
    fn test_negative_catalog_price_is_rejected() {
        let result = parse_catalog(r#"{"chains": {"silver_925": {"16": -5}}}"#, true);
        assert!(result.is_err());
    }
}
