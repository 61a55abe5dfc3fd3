//! Pricing engine.
//!
//! A pure function of the selection, the catalog and the pricing rules.
//! Every missing field contributes zero, so the running price can be shown
//! from the first step on.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{PendantPrice, PricingCatalog};
use crate::config::PricingRules;
use crate::money::Money;
use crate::selection::Selection;

/// Itemized price of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Pendant base price.
    pub base: Money,
    /// Charge for colors beyond the included ones.
    pub color_surcharge: Money,
    /// Chain price.
    pub chain: Money,
    /// Charge for diamonds.
    pub diamond_surcharge: Money,
    /// Sum of all components.
    pub total: Money,
}

impl PriceBreakdown {
    /// Everything except the pendant base price.
    pub fn extras(&self) -> Money {
        self.color_surcharge + self.chain + self.diamond_surcharge
    }
}

/// Look up the pendant price, if kind and material are both chosen and priced.
pub fn pendant_price(selection: &Selection, catalog: &PricingCatalog) -> Option<PendantPrice> {
    let kind = selection.pendant_kind.as_ref()?;
    let material = selection.pendant_material.as_ref()?;
    let price = catalog.pendant_price(kind, material);
    if price.is_none() {
        warn!(kind = %kind, material = %material, "no pendant price in catalog, counting as zero");
    }
    price
}

/// Compute the itemized price of a selection.
pub fn compute_total(
    selection: &Selection,
    catalog: &PricingCatalog,
    rules: &PricingRules,
) -> PriceBreakdown {
    let currency = rules.currency;
    let zero = Money::zero(currency);

    let pendant = pendant_price(selection, catalog);

    let base = pendant
        .map(|p| Money::from_units(p.base, currency))
        .unwrap_or(zero);

    let extra_colors = selection
        .add_ons
        .colors
        .saturating_sub(rules.included_colors);
    let color_surcharge = match pendant {
        Some(p) if selection.supports_color() => {
            Money::from_units(p.extra_color, currency) * i64::from(extra_colors)
        }
        _ => zero,
    };

    let chain = chain_price(selection, catalog)
        .map(|units| Money::from_units(units, currency))
        .unwrap_or(zero);

    let diamond_surcharge =
        Money::from_units(rules.diamond_rate, currency) * i64::from(selection.add_ons.diamonds);

    let total = [base, color_surcharge, chain, diamond_surcharge]
        .into_iter()
        .sum();

    PriceBreakdown {
        base,
        color_surcharge,
        chain,
        diamond_surcharge,
        total,
    }
}

fn chain_price(selection: &Selection, catalog: &PricingCatalog) -> Option<i64> {
    if !selection.has_chain() {
        return None;
    }
    let material = selection.chain_material.value()?;
    let size = selection.chain_size.value()?;
    let price = catalog.chain_price(material, size);
    if price.is_none() {
        warn!(material = %material, size = %size, "no chain price in catalog, counting as zero");
    }
    price
}

/// Label for the color add-on, once the pendant price is known.
///
/// `"2 colors included, then $22"`, or `"unavailable"` for kinds without colors.
pub fn color_pricing_label(
    selection: &Selection,
    catalog: &PricingCatalog,
    rules: &PricingRules,
) -> Option<String> {
    let price = pendant_price(selection, catalog)?;
    if !selection.supports_color() || price.extra_color <= 0 {
        return Some("unavailable".to_string());
    }
    Some(format!(
        "{} colors included, then {}",
        rules.included_colors,
        Money::from_units(price.extra_color, rules.currency).display_compact()
    ))
}
