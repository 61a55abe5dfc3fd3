//! Selection state.

use serde::{Deserialize, Serialize};

use crate::options::{ChainSize, ChainType, Material, PendantKind};

/// Where the current value of a chain field came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrigin {
    /// No value.
    #[default]
    Unset,
    /// Value filled in by the builder.
    Defaulted,
    /// Value picked by the user; defaulting leaves it alone.
    UserSet,
}

/// A chain field together with the origin of its value.
///
/// The value is `None` exactly when the origin is [`FieldOrigin::Unset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracked<T> {
    value: Option<T>,
    origin: FieldOrigin,
}

impl<T> Default for Tracked<T> {
    fn default() -> Self {
        Self {
            value: None,
            origin: FieldOrigin::Unset,
        }
    }
}

impl<T> Tracked<T> {
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn origin(&self) -> FieldOrigin {
        self.origin
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_user_set(&self) -> bool {
        self.origin == FieldOrigin::UserSet
    }

    /// Unset | Defaulted -> Defaulted(default); UserSet is kept.
    ///
    /// Returns whether the value was replaced.
    pub(crate) fn default_unless_user_set(&mut self, default: T) -> bool {
        if self.is_user_set() {
            return false;
        }
        self.value = Some(default);
        self.origin = FieldOrigin::Defaulted;
        true
    }

    /// Unset -> Defaulted(default); any present value is kept.
    ///
    /// Returns whether the value was restored.
    pub(crate) fn restore_if_empty(&mut self, default: T) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value = Some(default);
        self.origin = FieldOrigin::Defaulted;
        true
    }

    /// Any -> UserSet(value).
    pub(crate) fn set_by_user(&mut self, value: T) {
        self.value = Some(value);
        self.origin = FieldOrigin::UserSet;
    }

    /// Any -> Unset.
    pub(crate) fn clear(&mut self) {
        self.value = None;
        self.origin = FieldOrigin::Unset;
    }
}

/// Optional extras.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOns {
    /// Enamel colors, the first few included in the base price.
    pub colors: u32,
    /// Set diamonds.
    pub diamonds: u32,
    /// Engraving text, trimmed; empty means none.
    pub engraving: String,
}

/// Everything the user has chosen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub pendant_kind: Option<PendantKind>,
    pub pendant_material: Option<Material>,
    pub chain_type: Option<ChainType>,
    pub chain_size: Tracked<ChainSize>,
    pub chain_material: Tracked<Material>,
    pub add_ons: AddOns,
}

impl Selection {
    /// An empty selection, as at the start of a session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a chain is part of the order.
    pub fn has_chain(&self) -> bool {
        self.chain_type.as_ref().is_some_and(ChainType::is_present)
    }

    /// Whether the user declined a chain.
    pub fn declined_chain(&self) -> bool {
        self.chain_type.as_ref().is_some_and(ChainType::is_none)
    }

    /// Whether the selected kind accepts extra colors.
    ///
    /// True while no kind is selected.
    pub fn supports_color(&self) -> bool {
        self.pendant_kind
            .as_ref()
            .map_or(true, PendantKind::supports_color)
    }
}
