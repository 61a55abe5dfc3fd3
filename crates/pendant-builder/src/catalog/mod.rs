//! Pricing catalog.
//!
//! Read-only lookup tables: pendant prices keyed by (kind, material) and
//! chain prices keyed by (material, size). Amounts are whole currency
//! units; the currency comes from [`PricingRules`](crate::config::PricingRules).
//!
//! A missing pair is "price not yet determined" and is reported as `None`,
//! never as zero.

mod tables;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::options::{ChainSize, Material, PendantKind};
use crate::BuilderError;

/// Price entry for one pendant kind in one material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendantPrice {
    /// Base price including the first colors.
    pub base: i64,
    /// Price per color beyond the included ones.
    #[serde(default)]
    pub extra_color: i64,
}

impl PendantPrice {
    pub fn new(base: i64, extra_color: i64) -> Self {
        Self { base, extra_color }
    }
}

/// Pendant and chain pricing tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingCatalog {
    /// Pendant prices by kind, then material.
    #[serde(default)]
    pub pendants: BTreeMap<PendantKind, BTreeMap<Material, PendantPrice>>,
    /// Chain prices by material, then size.
    #[serde(default)]
    pub chains: BTreeMap<Material, BTreeMap<ChainSize, i64>>,
}

impl PricingCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The storefront price list.
    pub fn standard() -> Self {
        tables::standard()
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, BuilderError> {
        let catalog: PricingCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Add or replace a pendant price.
    pub fn with_pendant(mut self, kind: PendantKind, material: Material, price: PendantPrice) -> Self {
        self.pendants.entry(kind).or_default().insert(material, price);
        self
    }

    /// Add or replace a chain price.
    pub fn with_chain(mut self, material: Material, size: ChainSize, price: i64) -> Self {
        self.chains.entry(material).or_default().insert(size, price);
        self
    }

    /// Look up the pendant price for a kind and material.
    pub fn pendant_price(&self, kind: &PendantKind, material: &Material) -> Option<PendantPrice> {
        self.pendants.get(kind)?.get(material).copied()
    }

    /// Look up the chain price for a material and size.
    pub fn chain_price(&self, material: &Material, size: &ChainSize) -> Option<i64> {
        self.chains.get(material)?.get(size).copied()
    }

    /// Pendant kinds with at least one price.
    pub fn kinds(&self) -> impl Iterator<Item = &PendantKind> {
        self.pendants.keys()
    }

    /// Materials priced for a pendant kind.
    pub fn pendant_materials(&self, kind: &PendantKind) -> Vec<&Material> {
        self.pendants
            .get(kind)
            .map(|m| m.keys().collect())
            .unwrap_or_default()
    }

    /// Materials with at least one chain price.
    pub fn chain_materials(&self) -> impl Iterator<Item = &Material> {
        self.chains.keys()
    }

    /// Sizes priced for a chain material.
    pub fn chain_sizes(&self, material: &Material) -> Vec<&ChainSize> {
        self.chains
            .get(material)
            .map(|s| s.keys().collect())
            .unwrap_or_default()
    }

    /// Reject negative prices and prices above [`Money::MAX_UNIT_PRICE`].
    pub fn validate(&self) -> Result<(), BuilderError> {
        for (kind, materials) in &self.pendants {
            for (material, price) in materials {
                if !in_range(price.base) || !in_range(price.extra_color) {
                    return Err(BuilderError::InvalidConfig(format!(
                        "pendant price for {} in {} out of range",
                        kind, material
                    )));
                }
            }
        }
        for (material, sizes) in &self.chains {
            for (size, price) in sizes {
                if !in_range(*price) {
                    return Err(BuilderError::InvalidConfig(format!(
                        "chain price for {} at {}\" out of range",
                        material, size
                    )));
                }
            }
        }
        Ok(())
    }
}

fn in_range(price: i64) -> bool {
    (0..=Money::MAX_UNIT_PRICE).contains(&price)
}
