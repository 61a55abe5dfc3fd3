//! Order payload and summary.
//!
//! Everything here is a pure function of the selection and the computed
//! price; nothing is sent anywhere.

use serde::{Deserialize, Serialize};

use crate::config::CheckoutConfig;
use crate::options::format_label;
use crate::pricing::PriceBreakdown;
use crate::selection::Selection;

/// Placeholder for absent chain fields in order metadata.
pub const NONE_TOKEN: &str = "none";

/// Checkout-ready order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Total in minor currency units.
    pub pricing: i64,
    /// Lowercase currency code.
    pub currency: String,
    /// Items ordered.
    pub quantity: u32,
    /// Preview images.
    pub images: Vec<String>,
    /// Product title and metadata.
    pub product: OrderProduct,
    /// Redirect after payment. The checkout backend reads the key as
    /// `succsess_url`.
    #[serde(rename = "succsess_url", alias = "success_url")]
    pub success_url: String,
    /// Redirect after a cancelled payment.
    pub cancel_url: String,
}

/// Product part of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    /// Human-readable description.
    pub title: String,
    /// Raw selection fields.
    pub metadata: OrderMetadata,
}

/// Every raw selection field, as sent to checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMetadata {
    pub pendant_type: Option<String>,
    pub pendant_material: Option<String>,
    pub chain_type: Option<String>,
    /// Chain length, or `"none"`.
    pub chain_size: String,
    /// Chain metal, or `"none"`.
    pub chain_material: String,
    pub colors_count: u32,
    pub diamonds_count: u32,
    pub engraving_text: String,
}

impl OrderMetadata {
    /// Chain size and material are `"none"` whenever the chain was declined.
    pub fn from_selection(selection: &Selection) -> Self {
        let declined = selection.declined_chain();
        let chain_field = |value: Option<String>| match value {
            Some(value) if !declined => value,
            _ => NONE_TOKEN.to_string(),
        };

        Self {
            pendant_type: selection.pendant_kind.as_ref().map(|k| k.to_string()),
            pendant_material: selection.pendant_material.as_ref().map(|m| m.to_string()),
            chain_type: selection.chain_type.as_ref().map(|t| t.to_string()),
            chain_size: chain_field(selection.chain_size.value().map(|s| s.to_string())),
            chain_material: chain_field(selection.chain_material.value().map(|m| m.to_string())),
            colors_count: selection.add_ons.colors,
            diamonds_count: selection.add_ons.diamonds,
            engraving_text: selection.add_ons.engraving.clone(),
        }
    }
}

/// Build the order title.
///
/// Pendant first, then the chain if there is one, then the add-ons that
/// were actually chosen:
/// `3d Enamel pendant in Silver 925 with Silver 925 chain (16"), 3 colors`.
pub fn describe(selection: &Selection) -> String {
    let label = |token: Option<&str>| token.map(format_label).unwrap_or_default();

    let mut description = format!(
        "{} pendant in {}",
        label(selection.pendant_kind.as_ref().map(|k| k.as_str())),
        label(selection.pendant_material.as_ref().map(|m| m.as_str())),
    );

    if selection.has_chain() {
        description.push_str(&format!(
            " with {} chain ({}\")",
            label(selection.chain_material.value().map(|m| m.as_str())),
            selection.chain_size.value().map(|s| s.as_str()).unwrap_or_default(),
        ));
    }

    let add_ons = &selection.add_ons;
    if add_ons.colors > 0 {
        description.push_str(&format!(", {} colors", add_ons.colors));
    }
    if add_ons.diamonds > 0 {
        description.push_str(&format!(", {} diamonds", add_ons.diamonds));
    }
    if !add_ons.engraving.is_empty() {
        description.push_str(&format!(", engraved with \"{}\"", add_ons.engraving));
    }

    description
}

/// Build the checkout payload.
pub fn to_order_payload(
    selection: &Selection,
    price: &PriceBreakdown,
    checkout: &CheckoutConfig,
) -> OrderPayload {
    let images = selection
        .pendant_kind
        .as_ref()
        .and_then(|kind| checkout.image_for(kind))
        .map(|url| vec![url.to_string()])
        .unwrap_or_default();

    OrderPayload {
        pricing: price.total.amount_cents,
        currency: price.total.currency.code().to_lowercase(),
        quantity: checkout.quantity,
        images,
        product: OrderProduct {
            title: describe(selection),
            metadata: OrderMetadata::from_selection(selection),
        },
        success_url: checkout.success_url.clone(),
        cancel_url: checkout.cancel_url.clone(),
    }
}

/// One line of the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Review lines for the summary step, `-` standing in for missing values.
pub fn summary_lines(selection: &Selection) -> Vec<SummaryLine> {
    fn or_dash(value: Option<String>) -> String {
        value.unwrap_or_else(|| "-".to_string())
    }

    let chain_value = |value: Option<String>| {
        if selection.declined_chain() {
            "-".to_string()
        } else {
            or_dash(value)
        }
    };

    let add_ons = &selection.add_ons;
    let engraving = if add_ons.engraving.is_empty() {
        "-".to_string()
    } else {
        add_ons.engraving.clone()
    };

    vec![
        SummaryLine {
            label: "Pendant Type",
            value: or_dash(selection.pendant_kind.as_ref().map(|k| k.display_name())),
        },
        SummaryLine {
            label: "Pendant Material",
            value: or_dash(selection.pendant_material.as_ref().map(|m| m.display_name())),
        },
        SummaryLine {
            label: "Chain Type",
            value: or_dash(selection.chain_type.as_ref().map(|t| t.display_name())),
        },
        SummaryLine {
            label: "Chain Size",
            value: chain_value(selection.chain_size.value().map(|s| s.display_name())),
        },
        SummaryLine {
            label: "Chain Material",
            value: chain_value(selection.chain_material.value().map(|m| m.display_name())),
        },
        SummaryLine {
            label: "Add-ons",
            value: format!("{} colours, {} diamonds", add_ons.colors, add_ons.diamonds),
        },
        SummaryLine {
            label: "Engraving",
            value: engraving,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PricingCatalog;
    use crate::config::PricingRules;
    use crate::options::{ChainSize, ChainType, Material, PendantKind};
    use crate::pricing::compute_total;
    use crate::selection::{apply, Change};

    fn select(changes: Vec<Change>) -> Selection {
        let rules = PricingRules::default();
        let mut selection = Selection::new();
        for change in changes {
            apply(&mut selection, change, &rules);
        }
        selection
    }

    fn payload(selection: &Selection) -> OrderPayload {
        let price = compute_total(selection, &PricingCatalog::standard(), &PricingRules::default());
        to_order_payload(selection, &price, &CheckoutConfig::default())
    }

    #[test]
    fn test_describe_with_chain_and_add_ons() {
        let s = select(vec![
            Change::PendantType(PendantKind::ThreeDEnamel),
            Change::PendantMaterial(Material::Silver925),
            Change::ChainSize(ChainSize::In18),
            Change::Colors(3),
            Change::Diamonds(2),
            Change::Engraving("Forever".to_string()),
        ]);
        assert_eq!(
            describe(&s),
            "3d Enamel pendant in Silver 925 with Silver 925 chain (18\"), 3 colors, 2 diamonds, engraved with \"Forever\""
        );
    }

    #[test]
    fn test_describe_without_chain() {
        let s = select(vec![
            Change::PendantType(PendantKind::HaloSketch),
            Change::PendantMaterial(Material::YellowGold10k),
            Change::ChainType(ChainType::None),
        ]);
        assert_eq!(describe(&s), "Halo Sketch pendant in 10k Yellow Gold");
    }

    #[test]
    fn test_payload_fields() {
        let s = select(vec![
            Change::PendantType(PendantKind::TwoDEnamel),
            Change::PendantMaterial(Material::WhiteGold14k),
            Change::Diamonds(1),
        ]);
        let p = payload(&s);
        assert_eq!(p.pricing, (525 + 125 + 25) * 100);
        assert_eq!(p.currency, "usd");
        assert_eq!(p.quantity, 1);
        assert_eq!(p.images.len(), 1);
        assert!(p.images[0].ends_with("_2.avif"));
        assert_eq!(p.product.metadata.pendant_type.as_deref(), Some("2d_enamel"));
        assert_eq!(p.product.metadata.chain_size, "16");
        assert_eq!(p.product.metadata.chain_material, "14k_white_gold");
        assert_eq!(p.product.metadata.diamonds_count, 1);
        assert_eq!(p.success_url, "https://minimoria.webflow.io/build/success");
    }

    #[test]
    fn test_payload_wire_keys() {
        let s = select(vec![Change::PendantType(PendantKind::ThreeDEnamel)]);
        let json = serde_json::to_value(payload(&s)).unwrap();
        assert_eq!(
            json["succsess_url"],
            "https://minimoria.webflow.io/build/success"
        );
        assert!(json.get("success_url").is_none());
        assert!(json["cancel_url"].is_string());

        let back: OrderPayload = serde_json::from_value(json).unwrap();
        assert_eq!(back, payload(&s));
    }

    #[test]
    fn test_metadata_uses_none_token_without_chain() {
        let s = select(vec![
            Change::PendantType(PendantKind::SolidSketch),
            Change::PendantMaterial(Material::Silver925GoldPlated),
            Change::ChainType(ChainType::None),
        ]);
        let metadata = payload(&s).product.metadata;
        assert_eq!(metadata.chain_type.as_deref(), Some("no_chain"));
        assert_eq!(metadata.chain_size, "none");
        assert_eq!(metadata.chain_material, "none");

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["chain_size"], "none");
        assert_eq!(json["engraving_text"], "");
    }

    #[test]
    fn test_declined_chain_hides_chain_values() {
        // Values left behind on a declined chain never reach checkout.
        let mut s = select(vec![
            Change::PendantType(PendantKind::ThreeDEnamel),
            Change::PendantMaterial(Material::Silver925),
        ]);
        s.chain_type = Some(ChainType::None);
        assert!(s.chain_size.is_set());

        let metadata = OrderMetadata::from_selection(&s);
        assert_eq!(metadata.chain_size, NONE_TOKEN);
        assert_eq!(metadata.chain_material, NONE_TOKEN);

        let lines = summary_lines(&s);
        assert_eq!(lines[3].value, "-");
        assert_eq!(lines[4].value, "-");
    }

    #[test]
    fn test_payload_is_deterministic() {
        let s = select(vec![
            Change::PendantType(PendantKind::ThreeDEnamel),
            Change::PendantMaterial(Material::YellowGold18k),
            Change::Colors(4),
        ]);
        assert_eq!(payload(&s), payload(&s));
    }

    #[test]
    fn test_unknown_kind_has_no_image() {
        let s = select(vec![Change::PendantType(PendantKind::Unrecognized("locket".into()))]);
        assert!(payload(&s).images.is_empty());
    }

    #[test]
    fn test_summary_lines() {
        let s = select(vec![
            Change::PendantType(PendantKind::ThreeDEnamel),
            Change::PendantMaterial(Material::Silver925),
            Change::ChainType(ChainType::None),
            Change::Colors(2),
        ]);
        let lines = summary_lines(&s);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0].value, "3d Enamel");
        assert_eq!(lines[2].value, "No Chain");
        assert_eq!(lines[3].value, "-");
        assert_eq!(lines[5].value, "2 colours, 0 diamonds");
        assert_eq!(lines[6].value, "-");
    }
}
