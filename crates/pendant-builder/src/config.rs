//! Pricing rules and checkout configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::{Currency, Money};
use crate::options::{ChainSize, PendantKind};
use crate::BuilderError;

/// Top-level builder configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Pricing rules applied on top of the catalog tables.
    #[serde(default)]
    pub pricing: PricingRules,

    /// Checkout payload settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Path to a catalog file replacing the built-in tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

impl BuilderConfig {
    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if !(0..=Money::MAX_UNIT_PRICE).contains(&self.pricing.diamond_rate) {
            return Err(BuilderError::InvalidConfig(format!(
                "pricing.diamond_rate must be between 0 and {}",
                Money::MAX_UNIT_PRICE
            )));
        }
        if self.pricing.default_chain_size.inches().is_none() {
            return Err(BuilderError::InvalidConfig(format!(
                "pricing.default_chain_size '{}' is not an offered length",
                self.pricing.default_chain_size
            )));
        }
        if self.checkout.quantity == 0 {
            return Err(BuilderError::InvalidConfig(
                "checkout.quantity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rules the pricing engine applies on top of the catalog tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Currency of every catalog amount.
    #[serde(default)]
    pub currency: Currency,

    /// Colors included in the base price.
    #[serde(default = "default_included_colors")]
    pub included_colors: u32,

    /// Price per diamond, in whole currency units.
    #[serde(default = "default_diamond_rate")]
    pub diamond_rate: i64,

    /// Length a chain is defaulted to.
    #[serde(default = "default_chain_size")]
    pub default_chain_size: ChainSize,
}

fn default_included_colors() -> u32 {
    2
}

fn default_diamond_rate() -> i64 {
    25
}

fn default_chain_size() -> ChainSize {
    ChainSize::DEFAULT
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            included_colors: default_included_colors(),
            diamond_rate: default_diamond_rate(),
            default_chain_size: default_chain_size(),
        }
    }
}

/// Settings copied into the checkout payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Items per order.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Redirect after a successful payment.
    #[serde(default = "default_success_url")]
    pub success_url: String,

    /// Redirect after a cancelled or failed payment.
    #[serde(default = "default_cancel_url")]
    pub cancel_url: String,

    /// Preview image per pendant kind.
    #[serde(default = "default_images")]
    pub images: BTreeMap<PendantKind, String>,
}

fn default_quantity() -> u32 {
    1
}

fn default_success_url() -> String {
    "https://minimoria.webflow.io/build/success".to_string()
}

fn default_cancel_url() -> String {
    "https://minimoria.webflow.io/build/error".to_string()
}

fn default_images() -> BTreeMap<PendantKind, String> {
    const CDN: &str = "https://cdn.prod.website-files.com/682e514b555d6e56ed149a7f";
    [
        (PendantKind::ThreeDEnamel, "684a78d4f9e4477701534e54_1.avif"),
        (PendantKind::TwoDEnamel, "684a7901f486e2d3e851a147_2.avif"),
        (PendantKind::HaloSketch, "684a792915e8726a89f28f8b_3.avif"),
        (PendantKind::SolidSketch, "684a791efa3e2ebfe7969a49_4.avif"),
        (PendantKind::SolidPicture, "684a793a48f2f809d15f3ad4_5.avif"),
    ]
    .into_iter()
    .map(|(kind, file)| (kind, format!("{}/{}", CDN, file)))
    .collect()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            quantity: default_quantity(),
            success_url: default_success_url(),
            cancel_url: default_cancel_url(),
            images: default_images(),
        }
    }
}

impl CheckoutConfig {
    /// Preview image for a pendant kind, if one is configured.
    pub fn image_for(&self, kind: &PendantKind) -> Option<&str> {
        self.images.get(kind).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.pricing.included_colors, 2);
        assert_eq!(config.pricing.diamond_rate, 25);
        assert_eq!(config.pricing.default_chain_size, ChainSize::In16);
        assert_eq!(config.checkout.quantity, 1);
        assert!(config
            .checkout
            .image_for(&PendantKind::HaloSketch)
            .unwrap()
            .ends_with("_3.avif"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: BuilderConfig =
            serde_json::from_str(r#"{"pricing": {"diamond_rate": 30}}"#).unwrap();
        assert_eq!(config.pricing.diamond_rate, 30);
        assert_eq!(config.pricing.included_colors, 2);
        assert_eq!(config.checkout, CheckoutConfig::default());
    }

    #[test]
    fn test_toml_config() {
        let config: BuilderConfig = toml::from_str(
            r#"
            catalog = "catalog.toml"

            [pricing]
            currency = "EUR"
            default_chain_size = "18"

            [checkout]
            success_url = "https://shop.example/ok"

            [checkout.images]
            3d_enamel = "https://img.example/3d.png"
            "#,
        )
        .unwrap();
        assert_eq!(config.pricing.currency, Currency::EUR);
        assert_eq!(config.pricing.default_chain_size, ChainSize::In18);
        assert_eq!(config.checkout.success_url, "https://shop.example/ok");
        assert_eq!(config.checkout.images.len(), 1);
        assert_eq!(config.catalog.as_deref(), Some("catalog.toml"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = BuilderConfig::default();
        config.pricing.default_chain_size = ChainSize::parse("24");
        assert!(matches!(
            config.validate(),
            Err(BuilderError::InvalidConfig(_))
        ));

        let mut config = BuilderConfig::default();
        config.checkout.quantity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_diamond_rate() {
        let mut config = BuilderConfig::default();
        config.pricing.diamond_rate = -1;
        assert!(config.validate().is_err());

        config.pricing.diamond_rate = Money::MAX_UNIT_PRICE;
        assert!(config.validate().is_ok());

        config.pricing.diamond_rate = 100_000_000_000_000_000;
        assert!(matches!(
            config.validate(),
            Err(BuilderError::InvalidConfig(_))
        ));
    }
}
