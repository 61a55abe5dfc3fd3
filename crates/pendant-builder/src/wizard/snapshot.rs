//! Render-ready view of a session.

use serde::Serialize;

use super::{BuilderSession, Step};
use crate::options::Field;
use crate::order::{summary_lines, SummaryLine};
use crate::pricing::{color_pricing_label, PriceBreakdown};
use crate::translate::storefront_token;

/// Validity of one step for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepStatus {
    pub step: Step,
    pub valid: bool,
}

/// Storefront values of the chain fields, so the UI can tick the option
/// the builder filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChainTokens {
    pub chain_type: Option<String>,
    pub chain_size: Option<String>,
    pub chain_material: Option<String>,
}

/// Everything a UI needs to draw the builder after a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub step: Step,
    pub step_number: u8,
    pub total_steps: u8,
    pub price: PriceBreakdown,
    pub steps: Vec<StepStatus>,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub confirmed: bool,
    pub submitted: bool,
    /// Label for the color add-on, once the pendant price is known.
    pub color_pricing: Option<String>,
    pub colors_available: bool,
    pub chain_tokens: ChainTokens,
    /// Review lines, only on the summary step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<SummaryLine>>,
}

impl Snapshot {
    pub fn capture(session: &BuilderSession) -> Self {
        let selection = session.selection();
        let step = session.step();

        let steps = Step::ALL
            .into_iter()
            .map(|s| StepStatus {
                step: s,
                valid: session.check_step(s).is_ok(),
            })
            .collect();

        let chain_tokens = ChainTokens {
            chain_type: selection
                .chain_type
                .as_ref()
                .map(|t| storefront_token(Field::ChainType, t.as_str())),
            chain_size: selection
                .chain_size
                .value()
                .map(|s| storefront_token(Field::ChainSize, s.as_str())),
            chain_material: selection
                .chain_material
                .value()
                .map(|m| storefront_token(Field::ChainMaterial, m.as_str())),
        };

        Self {
            step,
            step_number: step.number(),
            total_steps: Step::LAST.number(),
            price: session.price(),
            steps,
            can_advance: step != Step::LAST && session.check_step(step).is_ok(),
            can_go_back: step != Step::FIRST,
            confirmed: session.is_confirmed(),
            submitted: session.is_closed(),
            color_pricing: color_pricing_label(
                selection,
                session.catalog(),
                &session.config().pricing,
            ),
            colors_available: selection.supports_color(),
            chain_tokens,
            summary: (step == Step::Summary).then(|| summary_lines(selection)),
        }
    }
}
