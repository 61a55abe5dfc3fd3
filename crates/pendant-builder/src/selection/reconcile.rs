//! Selection reconciler.
//!
//! Applies one change to a [`Selection`] and adjusts the fields that depend
//! on it. The chain size and chain material follow the [`FieldOrigin`]
//! state machine:
//!
//! | change                  | size / material                               |
//! |-------------------------|-----------------------------------------------|
//! | pendant material set    | chain becomes present; non-user values default |
//! | chain type `none`       | cleared, origin `Unset`                        |
//! | chain type `present`    | empty values restored to defaults              |
//! | size / material by user | stored, origin `UserSet`                       |
//!
//! Clearing through `none` is the only way back from `UserSet`. While the
//! chain type is `none`, size and material changes are ignored so both stay
//! empty.
//!
//! [`FieldOrigin`]: super::FieldOrigin

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Selection;
use crate::config::PricingRules;
use crate::options::{ChainSize, ChainType, Field, Material, PendantKind};
use crate::translate;

/// A typed change to one selection field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "kebab-case")]
pub enum Change {
    PendantType(PendantKind),
    PendantMaterial(Material),
    ChainType(ChainType),
    ChainSize(ChainSize),
    ChainMaterial(Material),
    Colors(u32),
    Diamonds(u32),
    Engraving(String),
}

impl Change {
    /// Build a change from a storefront field value.
    ///
    /// Values are translated through the field's token table. Counts read
    /// their leading digits (`"3 colors"` is 3) and become 0 without any;
    /// engraving text is trimmed.
    pub fn from_raw(field: Field, raw: &str) -> Self {
        match field {
            Field::PendantType => Change::PendantType(PendantKind::parse(raw)),
            Field::PendantMaterial => Change::PendantMaterial(translate::pendant_material(raw)),
            Field::ChainType => Change::ChainType(translate::chain_type(raw)),
            Field::ChainSize => Change::ChainSize(translate::chain_size(raw)),
            Field::ChainMaterial => Change::ChainMaterial(translate::chain_material(raw)),
            Field::Colors => Change::Colors(parse_count(raw)),
            Field::Diamonds => Change::Diamonds(parse_count(raw)),
            Field::Engraving => Change::Engraving(raw.trim().to_string()),
        }
    }

    pub fn field(&self) -> Field {
        match self {
            Change::PendantType(_) => Field::PendantType,
            Change::PendantMaterial(_) => Field::PendantMaterial,
            Change::ChainType(_) => Field::ChainType,
            Change::ChainSize(_) => Field::ChainSize,
            Change::ChainMaterial(_) => Field::ChainMaterial,
            Change::Colors(_) => Field::Colors,
            Change::Diamonds(_) => Field::Diamonds,
            Change::Engraving(_) => Field::Engraving,
        }
    }
}

fn parse_count(raw: &str) -> u32 {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().unwrap_or(0)
}

/// Apply a change and reconcile dependent fields.
pub fn apply(selection: &mut Selection, change: Change, rules: &PricingRules) {
    match change {
        Change::PendantType(kind) => {
            if !kind.supports_color() && selection.add_ons.colors > 0 {
                debug!(kind = %kind, "pendant kind has no colors, resetting color count");
                selection.add_ons.colors = 0;
            }
            selection.pendant_kind = Some(kind);
        }
        Change::PendantMaterial(material) => {
            selection.pendant_material = Some(material.clone());
            default_chain(selection, material, rules);
        }
        Change::ChainType(chain_type) => {
            match chain_type {
                ChainType::None => {
                    selection.chain_size.clear();
                    selection.chain_material.clear();
                    debug!("no chain selected, cleared chain size and material");
                }
                ChainType::Present => restore_chain(selection, rules),
                ChainType::Unrecognized(ref raw) => {
                    debug!(chain_type = %raw, "unrecognized chain type kept as-is");
                }
            }
            selection.chain_type = Some(chain_type);
        }
        Change::ChainSize(size) if selection.declined_chain() => {
            debug!(size = %size, "no chain selected, ignoring chain size");
        }
        Change::ChainSize(size) => {
            debug!(size = %size, "chain size set by user");
            selection.chain_size.set_by_user(size);
        }
        Change::ChainMaterial(material) if selection.declined_chain() => {
            debug!(material = %material, "no chain selected, ignoring chain material");
        }
        Change::ChainMaterial(material) => {
            debug!(material = %material, "chain material set by user");
            selection.chain_material.set_by_user(material);
        }
        Change::Colors(count) => {
            selection.add_ons.colors = if selection.supports_color() { count } else { 0 };
        }
        Change::Diamonds(count) => {
            selection.add_ons.diamonds = count;
        }
        Change::Engraving(text) => {
            selection.add_ons.engraving = text.trim().to_string();
        }
    }
}

/// Offer the default chain for a freshly chosen pendant material.
fn default_chain(selection: &mut Selection, pendant_material: Material, rules: &PricingRules) {
    selection.chain_type = Some(ChainType::Present);
    let size_defaulted = selection
        .chain_size
        .default_unless_user_set(rules.default_chain_size.clone());
    let material_defaulted = selection
        .chain_material
        .default_unless_user_set(pendant_material);
    debug!(
        size_defaulted,
        material_defaulted,
        size = ?selection.chain_size.value(),
        material = ?selection.chain_material.value(),
        "applied default chain selection"
    );
}

/// Fill empty chain fields after switching back to a chain.
fn restore_chain(selection: &mut Selection, rules: &PricingRules) {
    let size_restored = selection
        .chain_size
        .restore_if_empty(rules.default_chain_size.clone());
    // Without a pendant material there is nothing to match yet.
    let material_restored = match selection.pendant_material.clone() {
        Some(material) => selection.chain_material.restore_if_empty(material),
        None => false,
    };
    debug!(size_restored, material_restored, "restored chain selection");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::FieldOrigin;

    fn rules() -> PricingRules {
        PricingRules::default()
    }

    fn apply_all(selection: &mut Selection, changes: Vec<Change>) {
        for change in changes {
            apply(selection, change, &rules());
        }
    }

    #[test]
    fn test_pendant_material_defaults_chain() {
        let mut s = Selection::new();
        apply(&mut s, Change::PendantMaterial(Material::WhiteGold14k), &rules());

        assert_eq!(s.chain_type, Some(ChainType::Present));
        assert_eq!(s.chain_size.value(), Some(&ChainSize::In16));
        assert_eq!(s.chain_material.value(), Some(&Material::WhiteGold14k));
        assert_eq!(s.chain_size.origin(), FieldOrigin::Defaulted);
        assert_eq!(s.chain_material.origin(), FieldOrigin::Defaulted);
    }

    #[test]
    fn test_defaulted_material_follows_pendant_material() {
        let mut s = Selection::new();
        apply_all(
            &mut s,
            vec![
                Change::PendantMaterial(Material::Silver925),
                Change::PendantMaterial(Material::YellowGold18k),
            ],
        );
        assert_eq!(s.chain_material.value(), Some(&Material::YellowGold18k));
    }

    #[test]
    fn test_user_values_survive_material_change() {
        let mut s = Selection::new();
        apply_all(
            &mut s,
            vec![
                Change::PendantMaterial(Material::Silver925),
                Change::ChainSize(ChainSize::In22),
                Change::ChainMaterial(Material::WhiteGold10k),
                Change::PendantMaterial(Material::YellowGold14k),
            ],
        );
        assert_eq!(s.chain_size.value(), Some(&ChainSize::In22));
        assert_eq!(s.chain_material.value(), Some(&Material::WhiteGold10k));
        assert!(s.chain_size.is_user_set());
        assert!(s.chain_material.is_user_set());
    }

    #[test]
    fn test_user_size_only_keeps_material_defaulting() {
        let mut s = Selection::new();
        apply_all(
            &mut s,
            vec![
                Change::PendantMaterial(Material::Silver925),
                Change::ChainSize(ChainSize::In18),
                Change::PendantMaterial(Material::WhiteGold18k),
            ],
        );
        assert_eq!(s.chain_size.value(), Some(&ChainSize::In18));
        assert_eq!(s.chain_material.value(), Some(&Material::WhiteGold18k));
    }

    #[test]
    fn test_no_chain_clears_and_resets_origin() {
        let mut s = Selection::new();
        apply_all(
            &mut s,
            vec![
                Change::PendantMaterial(Material::Silver925),
                Change::ChainSize(ChainSize::In20),
                Change::ChainType(ChainType::None),
            ],
        );
        assert_eq!(s.chain_type, Some(ChainType::None));
        assert_eq!(s.chain_size.value(), None);
        assert_eq!(s.chain_material.value(), None);
        assert_eq!(s.chain_size.origin(), FieldOrigin::Unset);
        assert_eq!(s.chain_material.origin(), FieldOrigin::Unset);
    }

    #[test]
    fn test_chain_fields_stay_empty_without_chain() {
        let mut s = Selection::new();
        apply_all(
            &mut s,
            vec![
                Change::PendantMaterial(Material::Silver925),
                Change::ChainType(ChainType::None),
                Change::ChainSize(ChainSize::In20),
                Change::ChainMaterial(Material::WhiteGold14k),
            ],
        );
        assert_eq!(s.chain_size.value(), None);
        assert_eq!(s.chain_material.value(), None);
        assert_eq!(s.chain_size.origin(), FieldOrigin::Unset);

        apply(&mut s, Change::ChainType(ChainType::Present), &rules());
        assert_eq!(s.chain_size.value(), Some(&ChainSize::In16));
        assert_eq!(s.chain_material.value(), Some(&Material::Silver925));
    }

    #[test]
    fn test_none_then_present_restores_defaults() {
        let mut s = Selection::new();
        apply_all(
            &mut s,
            vec![
                Change::PendantMaterial(Material::YellowGold10k),
                Change::ChainType(ChainType::None),
                Change::ChainType(ChainType::Present),
            ],
        );
        assert_eq!(s.chain_size.value(), Some(&ChainSize::In16));
        assert_eq!(s.chain_material.value(), Some(&Material::YellowGold10k));
        assert_eq!(s.chain_size.origin(), FieldOrigin::Defaulted);
    }

    #[test]
    fn test_present_keeps_existing_values() {
        let mut s = Selection::new();
        apply_all(
            &mut s,
            vec![
                Change::PendantMaterial(Material::Silver925),
                Change::ChainSize(ChainSize::In22),
                Change::ChainType(ChainType::Present),
            ],
        );
        assert_eq!(s.chain_size.value(), Some(&ChainSize::In22));
        assert!(s.chain_size.is_user_set());
    }

    #[test]
    fn test_material_change_after_none_overrides_earlier_user_choice() {
        let mut s = Selection::new();
        apply_all(
            &mut s,
            vec![
                Change::PendantMaterial(Material::Silver925),
                Change::ChainSize(ChainSize::In22),
                Change::ChainType(ChainType::None),
                Change::PendantMaterial(Material::WhiteGold14k),
            ],
        );
        // The "none" transition dropped the user flag, so defaulting wins.
        assert_eq!(s.chain_type, Some(ChainType::Present));
        assert_eq!(s.chain_size.value(), Some(&ChainSize::In16));
        assert_eq!(s.chain_material.value(), Some(&Material::WhiteGold14k));
    }

    #[test]
    fn test_present_without_pendant_material() {
        let mut s = Selection::new();
        apply(&mut s, Change::ChainType(ChainType::Present), &rules());
        assert_eq!(s.chain_size.value(), Some(&ChainSize::In16));
        assert_eq!(s.chain_material.value(), None);
    }

    #[test]
    fn test_colorless_kind_resets_colors() {
        let mut s = Selection::new();
        apply_all(
            &mut s,
            vec![
                Change::PendantType(PendantKind::ThreeDEnamel),
                Change::Colors(5),
                Change::PendantType(PendantKind::HaloSketch),
            ],
        );
        assert_eq!(s.add_ons.colors, 0);

        apply(&mut s, Change::Colors(3), &rules());
        assert_eq!(s.add_ons.colors, 0);
    }

    #[test]
    fn test_parse_count_reads_leading_digits() {
        assert_eq!(parse_count("3 colors"), 3);
        assert_eq!(parse_count(" 12"), 12);
        assert_eq!(parse_count("+2"), 2);
        assert_eq!(parse_count("7.5"), 7);
        assert_eq!(parse_count("-1"), 0);
        assert_eq!(parse_count("x3"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("99999999999"), 0);
    }

    #[test]
    fn test_from_raw_translates() {
        assert_eq!(
            Change::from_raw(Field::PendantMaterial, "pendant_gold_white_14k"),
            Change::PendantMaterial(Material::WhiteGold14k)
        );
        assert_eq!(
            Change::from_raw(Field::ChainSize, "18_inches"),
            Change::ChainSize(ChainSize::In18)
        );
        assert_eq!(Change::from_raw(Field::Colors, "4"), Change::Colors(4));
        assert_eq!(Change::from_raw(Field::Diamonds, "lots"), Change::Diamonds(0));
        assert_eq!(Change::from_raw(Field::Colors, "3 colors"), Change::Colors(3));
        assert_eq!(
            Change::from_raw(Field::Engraving, "  Mom  "),
            Change::Engraving("Mom".to_string())
        );
        assert_eq!(
            Change::from_raw(Field::PendantType, "3d_enamel").field(),
            Field::PendantType
        );
    }
}
