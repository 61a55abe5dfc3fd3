//! Built-in storefront price list.

use super::{PendantPrice, PricingCatalog};
use crate::options::{ChainSize, Material, PendantKind};

/// Base prices per metal tier: silver, 10k, 14k, 18k.
type Tiers = [i64; 4];

fn pendants() -> [(PendantKind, Tiers, i64); 5] {
    [
        (PendantKind::ThreeDEnamel, [163, 430, 535, 630], 22),
        (PendantKind::TwoDEnamel, [153, 420, 525, 620], 14),
        (PendantKind::SolidSketch, [153, 420, 525, 620], 14),
        (PendantKind::HaloSketch, [140, 380, 480, 580], 0),
        (PendantKind::SolidPicture, [153, 420, 525, 620], 0),
    ]
}

/// Chain prices per metal tier at 16", 18", 20" and 22".
const CHAINS: [[i64; 4]; 4] = [
    [25, 25, 30, 35],
    [110, 110, 120, 130],
    [125, 125, 135, 145],
    [140, 140, 150, 160],
];

fn tier(material: &Material) -> Option<usize> {
    match material {
        Material::Silver925GoldPlated | Material::Silver925 => Some(0),
        Material::YellowGold10k | Material::WhiteGold10k => Some(1),
        Material::YellowGold14k | Material::WhiteGold14k => Some(2),
        Material::YellowGold18k | Material::WhiteGold18k => Some(3),
        Material::Unrecognized(_) => None,
    }
}

pub(super) fn standard() -> PricingCatalog {
    let mut catalog = PricingCatalog::new();

    for (kind, tiers, extra_color) in pendants() {
        for material in Material::ALL {
            if let Some(t) = tier(&material) {
                catalog = catalog.with_pendant(
                    kind.clone(),
                    material,
                    PendantPrice::new(tiers[t], extra_color),
                );
            }
        }
    }

    for material in Material::ALL {
        if let Some(t) = tier(&material) {
            for (size, price) in ChainSize::ALL.into_iter().zip(CHAINS[t]) {
                catalog = catalog.with_chain(material.clone(), size, price);
            }
        }
    }

    catalog
}
