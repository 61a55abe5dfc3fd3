//! Option types for every choice the builder offers.
//!
//! Each closed option set carries an `Unrecognized` variant so that a
//! token with no canonical meaning survives translation unchanged
//! instead of failing the selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pendant style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PendantKind {
    ThreeDEnamel,
    TwoDEnamel,
    HaloSketch,
    SolidSketch,
    SolidPicture,
    Unrecognized(String),
}

impl PendantKind {
    /// All known pendant kinds, in catalog order.
    pub const ALL: [PendantKind; 5] = [
        PendantKind::ThreeDEnamel,
        PendantKind::TwoDEnamel,
        PendantKind::HaloSketch,
        PendantKind::SolidSketch,
        PendantKind::SolidPicture,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PendantKind::ThreeDEnamel => "3d_enamel",
            PendantKind::TwoDEnamel => "2d_enamel",
            PendantKind::HaloSketch => "halo_sketch",
            PendantKind::SolidSketch => "solid_sketch",
            PendantKind::SolidPicture => "solid_picture",
            PendantKind::Unrecognized(raw) => raw,
        }
    }

    /// Parse a canonical token, keeping unknown tokens as-is.
    pub fn parse(token: &str) -> Self {
        match token {
            "3d_enamel" => PendantKind::ThreeDEnamel,
            "2d_enamel" => PendantKind::TwoDEnamel,
            "halo_sketch" => PendantKind::HaloSketch,
            "solid_sketch" => PendantKind::SolidSketch,
            "solid_picture" => PendantKind::SolidPicture,
            other => PendantKind::Unrecognized(other.to_string()),
        }
    }

    /// Whether extra enamel colors can be ordered for this kind.
    pub fn supports_color(&self) -> bool {
        !matches!(self, PendantKind::HaloSketch | PendantKind::SolidPicture)
    }

    pub fn display_name(&self) -> String {
        format_label(self.as_str())
    }
}

/// Metal used for the pendant or the chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Material {
    Silver925GoldPlated,
    Silver925,
    YellowGold10k,
    WhiteGold10k,
    YellowGold14k,
    WhiteGold14k,
    YellowGold18k,
    WhiteGold18k,
    Unrecognized(String),
}

impl Material {
    /// All known materials, in catalog order.
    pub const ALL: [Material; 8] = [
        Material::Silver925GoldPlated,
        Material::Silver925,
        Material::YellowGold10k,
        Material::WhiteGold10k,
        Material::YellowGold14k,
        Material::WhiteGold14k,
        Material::YellowGold18k,
        Material::WhiteGold18k,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Material::Silver925GoldPlated => "silver_925_gold_plated",
            Material::Silver925 => "silver_925",
            Material::YellowGold10k => "10k_yellow_gold",
            Material::WhiteGold10k => "10k_white_gold",
            Material::YellowGold14k => "14k_yellow_gold",
            Material::WhiteGold14k => "14k_white_gold",
            Material::YellowGold18k => "18k_yellow_gold",
            Material::WhiteGold18k => "18k_white_gold",
            Material::Unrecognized(raw) => raw,
        }
    }

    /// Parse a canonical token, keeping unknown tokens as-is.
    pub fn parse(token: &str) -> Self {
        match token {
            "silver_925_gold_plated" => Material::Silver925GoldPlated,
            "silver_925" => Material::Silver925,
            "10k_yellow_gold" => Material::YellowGold10k,
            "10k_white_gold" => Material::WhiteGold10k,
            "14k_yellow_gold" => Material::YellowGold14k,
            "14k_white_gold" => Material::WhiteGold14k,
            "18k_yellow_gold" => Material::YellowGold18k,
            "18k_white_gold" => Material::WhiteGold18k,
            other => Material::Unrecognized(other.to_string()),
        }
    }

    pub fn display_name(&self) -> String {
        format_label(self.as_str())
    }
}

/// Whether the order includes a chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChainType {
    /// Cross engraved chain.
    Present,
    /// Pendant only.
    None,
    Unrecognized(String),
}

impl ChainType {
    pub fn as_str(&self) -> &str {
        match self {
            ChainType::Present => "cross_engraved",
            ChainType::None => "no_chain",
            ChainType::Unrecognized(raw) => raw,
        }
    }

    pub fn parse(token: &str) -> Self {
        match token {
            "cross_engraved" => ChainType::Present,
            "no_chain" => ChainType::None,
            other => ChainType::Unrecognized(other.to_string()),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ChainType::Present)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ChainType::None)
    }

    pub fn display_name(&self) -> String {
        format_label(self.as_str())
    }
}

/// Chain length in inches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChainSize {
    In16,
    In18,
    In20,
    In22,
    Unrecognized(String),
}

impl ChainSize {
    /// All offered chain lengths.
    pub const ALL: [ChainSize; 4] = [
        ChainSize::In16,
        ChainSize::In18,
        ChainSize::In20,
        ChainSize::In22,
    ];

    /// Length a fresh chain starts with.
    pub const DEFAULT: ChainSize = ChainSize::In16;

    pub fn as_str(&self) -> &str {
        match self {
            ChainSize::In16 => "16",
            ChainSize::In18 => "18",
            ChainSize::In20 => "20",
            ChainSize::In22 => "22",
            ChainSize::Unrecognized(raw) => raw,
        }
    }

    pub fn parse(token: &str) -> Self {
        match token {
            "16" => ChainSize::In16,
            "18" => ChainSize::In18,
            "20" => ChainSize::In20,
            "22" => ChainSize::In22,
            other => ChainSize::Unrecognized(other.to_string()),
        }
    }

    pub fn inches(&self) -> Option<u8> {
        match self {
            ChainSize::In16 => Some(16),
            ChainSize::In18 => Some(18),
            ChainSize::In20 => Some(20),
            ChainSize::In22 => Some(22),
            ChainSize::Unrecognized(_) => None,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{}\"", self.as_str())
    }
}

macro_rules! string_token {
    ($name:ident) => {
        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::parse(&s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::parse(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

string_token!(PendantKind);
string_token!(Material);
string_token!(ChainType);
string_token!(ChainSize);

/// A field the user can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    PendantType,
    PendantMaterial,
    ChainType,
    ChainSize,
    ChainMaterial,
    Colors,
    Diamonds,
    Engraving,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::PendantType,
        Field::PendantMaterial,
        Field::ChainType,
        Field::ChainSize,
        Field::ChainMaterial,
        Field::Colors,
        Field::Diamonds,
        Field::Engraving,
    ];

    /// Input name as used by the storefront form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PendantType => "pendant-type",
            Field::PendantMaterial => "pendant-material",
            Field::ChainType => "chain-type",
            Field::ChainSize => "chain-size",
            Field::ChainMaterial => "chain-material",
            Field::Colors => "colors",
            Field::Diamonds => "diamonds",
            Field::Engraving => "engraving",
        }
    }

    /// Human-readable name used in validation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::PendantType => "pendant type",
            Field::PendantMaterial => "pendant material",
            Field::ChainType => "chain type",
            Field::ChainSize => "chain size",
            Field::ChainMaterial => "chain material",
            Field::Colors => "colors",
            Field::Diamonds => "diamonds",
            Field::Engraving => "engraving",
        }
    }

    /// Look up a field by input name; `_` and `-` are interchangeable.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        Field::ALL.into_iter().find(|f| f.as_str() == normalized)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Turn a snake_case token into title-cased words.
///
/// `silver_925_gold_plated` becomes `Silver 925 Gold Plated`; a letter is
/// upper-cased only when it starts a word.
pub fn format_label(token: &str) -> String {
    let spaced = token.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for c in spaced.chars() {
        if !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = c.is_alphanumeric();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip_and_unrecognized() {
        for kind in PendantKind::ALL {
            assert_eq!(PendantKind::parse(kind.as_str()), kind);
        }
        assert_eq!(
            PendantKind::parse("mystery"),
            PendantKind::Unrecognized("mystery".to_string())
        );
        assert_eq!(PendantKind::parse("mystery").as_str(), "mystery");
    }

    #[test]
    fn test_supports_color() {
        assert!(PendantKind::ThreeDEnamel.supports_color());
        assert!(PendantKind::TwoDEnamel.supports_color());
        assert!(PendantKind::SolidSketch.supports_color());
        assert!(!PendantKind::HaloSketch.supports_color());
        assert!(!PendantKind::SolidPicture.supports_color());
        assert!(PendantKind::Unrecognized("x".into()).supports_color());
    }

    #[test]
    fn test_material_parse() {
        assert_eq!(Material::parse("14k_white_gold"), Material::WhiteGold14k);
        assert_eq!(
            Material::parse("platinum"),
            Material::Unrecognized("platinum".to_string())
        );
    }

    #[test]
    fn test_chain_size() {
        assert_eq!(ChainSize::parse("20"), ChainSize::In20);
        assert_eq!(ChainSize::In22.inches(), Some(22));
        assert_eq!(ChainSize::parse("24").inches(), None);
        assert_eq!(ChainSize::In16.display_name(), "16\"");
    }

    #[test]
    fn test_serde_as_tokens() {
        let json = serde_json::to_string(&Material::YellowGold18k).unwrap();
        assert_eq!(json, "\"18k_yellow_gold\"");
        let back: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Material::YellowGold18k);

        let kind: PendantKind = serde_json::from_str("\"unknown_kind\"").unwrap();
        assert_eq!(kind, PendantKind::Unrecognized("unknown_kind".to_string()));
    }

    #[test]
    fn test_field_from_name() {
        assert_eq!(Field::from_name("pendant-type"), Some(Field::PendantType));
        assert_eq!(Field::from_name("chain_size"), Some(Field::ChainSize));
        assert_eq!(Field::from_name("Colors"), Some(Field::Colors));
        assert_eq!(Field::from_name("gift-wrap"), None);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("silver_925_gold_plated"), "Silver 925 Gold Plated");
        assert_eq!(format_label("3d_enamel"), "3d Enamel");
        assert_eq!(format_label("10k_yellow_gold"), "10k Yellow Gold");
        assert_eq!(format_label("halo_sketch"), "Halo Sketch");
        assert_eq!(format_label(""), "");
    }
}
