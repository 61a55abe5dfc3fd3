//! Custom pendant builder.
//!
//! The core of a step-by-step configurator for custom jewelry pendants:
//!
//! - **Selection**: typed options and a reconciler that keeps the chain
//!   fields consistent with the pendant material
//! - **Wizard**: seven-step flow with validation and skip rules
//! - **Pricing**: running total from the catalog tables
//! - **Order**: checkout payload and summary handed to a submitter
//!
//! # Example
//!
//! ```rust
//! use pendant_builder::prelude::*;
//!
//! let mut session = BuilderSession::with_defaults();
//! session.apply_selection(Field::PendantType, "3d_enamel").unwrap();
//! session.apply_selection(Field::PendantMaterial, "pendant_gold_yellow_14k").unwrap();
//!
//! // The chain defaults to 16" in the pendant's metal.
//! let price = session.price();
//! assert_eq!(price.total.display_compact(), "$660");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod options;
pub mod order;
pub mod pricing;
pub mod selection;
pub mod submit;
pub mod translate;
pub mod wizard;

pub use error::BuilderError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::BuilderError;
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{PendantPrice, PricingCatalog};
    pub use crate::config::{BuilderConfig, CheckoutConfig, PricingRules};
    pub use crate::options::{ChainSize, ChainType, Field, Material, PendantKind};
    pub use crate::selection::{Change, FieldOrigin, Selection};

    pub use crate::order::{OrderPayload, SummaryLine};
    pub use crate::pricing::PriceBreakdown;
    pub use crate::submit::{OrderSubmitter, Outbox};
    pub use crate::wizard::{BuilderSession, Command, Snapshot, Step};
}
