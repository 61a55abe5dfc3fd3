//! Builder steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::options::Field;

/// Steps in the builder flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Pendant style.
    PendantType,
    /// Pendant metal.
    PendantMaterial,
    /// Chain or no chain.
    ChainType,
    /// Chain length.
    ChainSize,
    /// Chain metal.
    ChainMaterial,
    /// Colors, diamonds, engraving.
    AddOns,
    /// Order review and checkout.
    Summary,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::PendantType,
        Step::PendantMaterial,
        Step::ChainType,
        Step::ChainSize,
        Step::ChainMaterial,
        Step::AddOns,
        Step::Summary,
    ];

    pub const FIRST: Step = Step::PendantType;
    pub const LAST: Step = Step::Summary;

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::PendantType => "pendant-type",
            Step::PendantMaterial => "pendant-material",
            Step::ChainType => "chain-type",
            Step::ChainSize => "chain-size",
            Step::ChainMaterial => "chain-material",
            Step::AddOns => "add-ons",
            Step::Summary => "summary",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Step::PendantType => "Pendant Type",
            Step::PendantMaterial => "Pendant Material",
            Step::ChainType => "Chain Type",
            Step::ChainSize => "Chain Size",
            Step::ChainMaterial => "Chain Material",
            Step::AddOns => "Add-ons",
            Step::Summary => "Summary",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            Step::PendantType => 1,
            Step::PendantMaterial => 2,
            Step::ChainType => 3,
            Step::ChainSize => 4,
            Step::ChainMaterial => 5,
            Step::AddOns => 6,
            Step::Summary => 7,
        }
    }

    pub fn from_number(number: u8) -> Option<Step> {
        Step::ALL.into_iter().find(|s| s.number() == number)
    }

    /// The field this step asks for, if it asks for a single one.
    pub fn field(&self) -> Option<Field> {
        match self {
            Step::PendantType => Some(Field::PendantType),
            Step::PendantMaterial => Some(Field::PendantMaterial),
            Step::ChainType => Some(Field::ChainType),
            Step::ChainSize => Some(Field::ChainSize),
            Step::ChainMaterial => Some(Field::ChainMaterial),
            Step::AddOns | Step::Summary => None,
        }
    }

    /// Plain successor, ignoring skip rules.
    pub(crate) fn successor(&self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    /// Plain predecessor, ignoring skip rules.
    pub(crate) fn predecessor(&self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.number() as usize, i + 1);
            assert_eq!(Step::from_number(step.number()), Some(*step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(8), None);
    }

    #[test]
    fn test_successor_and_predecessor() {
        assert_eq!(Step::FIRST.predecessor(), None);
        assert_eq!(Step::LAST.successor(), None);
        assert_eq!(Step::ChainType.successor(), Some(Step::ChainSize));
        assert_eq!(Step::AddOns.predecessor(), Some(Step::ChainMaterial));
    }
}
