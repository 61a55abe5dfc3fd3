//! Storefront token translation.
//!
//! The storefront form posts its own option values (`pendant_gold_yellow_18k`,
//! `16_inches`, ...). Each field has a fixed table mapping those values to
//! canonical tokens. A value missing from the table is passed through
//! unchanged, so canonical tokens are accepted as-is as well.

use crate::options::{ChainSize, ChainType, Field, Material};

const PENDANT_MATERIALS: &[(&str, &str)] = &[
    ("pendant_gold_yellow_18k", "18k_yellow_gold"),
    ("pendant_gold_yellow_14k", "14k_yellow_gold"),
    ("pendant_gold_yellow_10k", "10k_yellow_gold"),
    ("pendant_gold_white_18k", "18k_white_gold"),
    ("pendant_gold_white_14k", "14k_white_gold"),
    ("pendant_gold_white_10k", "10k_white_gold"),
    ("pendant_silver_white_gold_plated", "silver_925"),
    ("pendant_silver_yellow_gold_plated", "silver_925_gold_plated"),
];

const CHAIN_MATERIALS: &[(&str, &str)] = &[
    ("chain_gold_yellow_18k", "18k_yellow_gold"),
    ("chain_gold_yellow_14k", "14k_yellow_gold"),
    ("chain_gold_yellow_10k", "10k_yellow_gold"),
    ("chain_gold_white_18k", "18k_white_gold"),
    ("chain_gold_white_14k", "14k_white_gold"),
    ("chain_gold_white_10k", "10k_white_gold"),
    ("chain_silver_white_gold_plated", "silver_925"),
    ("chain_silver_yellow_gold_plated", "silver_925_gold_plated"),
];

const CHAIN_SIZES: &[(&str, &str)] = &[
    ("16_inches", "16"),
    ("18_inches", "18"),
    ("20_inches", "20"),
    ("22_inches", "22"),
];

const CHAIN_TYPES: &[(&str, &str)] = &[
    ("chain_type_cross_engraved", "cross_engraved"),
    ("chain_type_none", "no_chain"),
];

fn table_for(field: Field) -> &'static [(&'static str, &'static str)] {
    match field {
        Field::PendantMaterial => PENDANT_MATERIALS,
        Field::ChainMaterial => CHAIN_MATERIALS,
        Field::ChainSize => CHAIN_SIZES,
        Field::ChainType => CHAIN_TYPES,
        Field::PendantType | Field::Colors | Field::Diamonds | Field::Engraving => &[],
    }
}

/// Translate a storefront value into its canonical token.
///
/// Total: values without a table entry come back unchanged.
pub fn canonical_token(field: Field, raw: &str) -> &str {
    table_for(field)
        .iter()
        .find(|(ui, _)| *ui == raw)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(raw)
}

/// Storefront value for a canonical token, the reverse of [`canonical_token`].
///
/// Used by a rendering adapter to tick the option the builder defaulted.
pub fn storefront_token(field: Field, canonical: &str) -> String {
    table_for(field)
        .iter()
        .find(|(_, c)| *c == canonical)
        .map(|(ui, _)| (*ui).to_string())
        .unwrap_or_else(|| canonical.to_string())
}

pub fn pendant_material(raw: &str) -> Material {
    Material::parse(canonical_token(Field::PendantMaterial, raw))
}

pub fn chain_material(raw: &str) -> Material {
    Material::parse(canonical_token(Field::ChainMaterial, raw))
}

pub fn chain_size(raw: &str) -> ChainSize {
    ChainSize::parse(canonical_token(Field::ChainSize, raw))
}

pub fn chain_type(raw: &str) -> ChainType {
    ChainType::parse(canonical_token(Field::ChainType, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_values_translate() {
        assert_eq!(
            pendant_material("pendant_silver_white_gold_plated"),
            Material::Silver925
        );
        assert_eq!(
            chain_material("chain_silver_yellow_gold_plated"),
            Material::Silver925GoldPlated
        );
        assert_eq!(chain_size("20_inches"), ChainSize::In20);
        assert_eq!(chain_type("chain_type_none"), ChainType::None);
        assert_eq!(chain_type("chain_type_cross_engraved"), ChainType::Present);
    }

    #[test]
    fn test_canonical_values_pass_through() {
        assert_eq!(pendant_material("14k_white_gold"), Material::WhiteGold14k);
        assert_eq!(chain_size("18"), ChainSize::In18);
    }

    #[test]
    fn test_unknown_values_pass_through_unchanged() {
        assert_eq!(canonical_token(Field::ChainSize, "24_inches"), "24_inches");
        assert_eq!(
            chain_size("24_inches"),
            ChainSize::Unrecognized("24_inches".to_string())
        );
        // Tables are per field: a chain token is not a pendant material.
        assert_eq!(
            pendant_material("chain_gold_yellow_18k"),
            Material::Unrecognized("chain_gold_yellow_18k".to_string())
        );
    }

    #[test]
    fn test_storefront_token_reverses_table() {
        assert_eq!(
            storefront_token(Field::ChainMaterial, "silver_925"),
            "chain_silver_white_gold_plated"
        );
        assert_eq!(storefront_token(Field::ChainSize, "16"), "16_inches");
        assert_eq!(storefront_token(Field::ChainSize, "30"), "30");
    }
}
