//! Builder session.

use tracing::{debug, info};

use super::{Command, Snapshot, Step};
use crate::catalog::PricingCatalog;
use crate::config::BuilderConfig;
use crate::options::Field;
use crate::order::{to_order_payload, OrderPayload};
use crate::pricing::{compute_total, PriceBreakdown};
use crate::selection::{apply, Change, Selection};
use crate::submit::OrderSubmitter;
use crate::BuilderError;

/// One customer's walk through the builder.
///
/// Owns the selection, the current step and the confirmation state. All
/// operations are synchronous; a failing operation leaves the session
/// untouched. After a successful [`submit`](Self::submit) the session is
/// closed and every mutating operation returns
/// [`BuilderError::SessionClosed`].
#[derive(Debug, Clone)]
pub struct BuilderSession {
    catalog: PricingCatalog,
    config: BuilderConfig,
    selection: Selection,
    step: Step,
    confirmed: bool,
    closed: bool,
}

impl BuilderSession {
    /// Start a session on step 1 with an empty selection.
    pub fn new(catalog: PricingCatalog, config: BuilderConfig) -> Result<Self, BuilderError> {
        config.validate()?;
        catalog.validate()?;
        Ok(Self {
            catalog,
            config,
            selection: Selection::new(),
            step: Step::FIRST,
            confirmed: false,
            closed: false,
        })
    }

    /// Session over the built-in catalog and default configuration.
    pub fn with_defaults() -> Self {
        Self {
            catalog: PricingCatalog::standard(),
            config: BuilderConfig::default(),
            selection: Selection::new(),
            step: Step::FIRST,
            confirmed: false,
            closed: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Whether the order has been submitted.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<(), BuilderError> {
        if self.closed {
            return Err(BuilderError::SessionClosed);
        }
        Ok(())
    }

    /// Apply a raw storefront value to a field and return the new price.
    pub fn apply_selection(
        &mut self,
        field: Field,
        raw: &str,
    ) -> Result<PriceBreakdown, BuilderError> {
        self.apply_change(Change::from_raw(field, raw))
    }

    /// Like [`apply_selection`](Self::apply_selection), with the field given
    /// by its input name.
    pub fn apply_named(&mut self, name: &str, raw: &str) -> Result<PriceBreakdown, BuilderError> {
        let field =
            Field::from_name(name).ok_or_else(|| BuilderError::UnknownField(name.to_string()))?;
        self.apply_selection(field, raw)
    }

    /// Apply an already typed change.
    ///
    /// Any change withdraws an earlier confirmation.
    pub fn apply_change(&mut self, change: Change) -> Result<PriceBreakdown, BuilderError> {
        self.ensure_open()?;
        debug!(field = %change.field(), step = %self.step, "applying selection");
        apply(&mut self.selection, change, &self.config.pricing);
        self.confirmed = false;
        Ok(self.price())
    }

    /// Check whether `step` has what it needs.
    pub fn check_step(&self, step: Step) -> Result<(), BuilderError> {
        let s = &self.selection;
        let missing = match step {
            Step::PendantType => s.pendant_kind.is_none(),
            Step::PendantMaterial => s.pendant_material.is_none(),
            Step::ChainType => s.chain_type.is_none(),
            Step::ChainSize => s.has_chain() && !s.chain_size.is_set(),
            Step::ChainMaterial => s.has_chain() && !s.chain_material.is_set(),
            Step::AddOns | Step::Summary => false,
        };

        match step.field() {
            Some(field) if missing => Err(BuilderError::IncompleteSelection {
                step,
                field,
                message: format!("Please select a {} before continuing.", field.display_name()),
            }),
            _ => Ok(()),
        }
    }

    /// Check the current step.
    pub fn validate_step(&self) -> Result<(), BuilderError> {
        self.check_step(self.step)
    }

    /// Validate the current step and move forward.
    ///
    /// Leaving the chain type step without a chain skips straight to the
    /// add-ons.
    pub fn next(&mut self) -> Result<Step, BuilderError> {
        self.ensure_open()?;
        let Some(plain) = self.step.successor() else {
            return Err(BuilderError::InvalidTransition {
                from: self.step.to_string(),
                to: "none".to_string(),
            });
        };
        self.validate_step()?;

        let target = if self.step == Step::ChainType && self.selection.declined_chain() {
            Step::AddOns
        } else {
            plain
        };

        debug!(from = %self.step, to = %target, "advancing");
        self.step = target;
        Ok(target)
    }

    /// Move back one step.
    ///
    /// Without a chain the add-ons step goes back to the chain type step.
    /// Leaving the summary withdraws the confirmation.
    pub fn previous(&mut self) -> Result<Step, BuilderError> {
        self.ensure_open()?;
        let Some(plain) = self.step.predecessor() else {
            return Err(BuilderError::InvalidTransition {
                from: self.step.to_string(),
                to: "none".to_string(),
            });
        };

        let target = if self.step == Step::AddOns && self.selection.declined_chain() {
            Step::ChainType
        } else {
            plain
        };

        debug!(from = %self.step, to = %target, "going back");
        if self.step == Step::Summary {
            self.confirmed = false;
        }
        self.step = target;
        Ok(target)
    }

    /// Tick or untick the confirmation box on the summary step.
    pub fn set_confirmed(&mut self, confirmed: bool) -> Result<(), BuilderError> {
        self.ensure_open()?;
        if self.step != Step::Summary {
            return Err(BuilderError::InvalidTransition {
                from: self.step.to_string(),
                to: Step::Summary.to_string(),
            });
        }
        self.confirmed = confirmed;
        Ok(())
    }

    /// Price of the current selection.
    pub fn price(&self) -> PriceBreakdown {
        compute_total(&self.selection, &self.catalog, &self.config.pricing)
    }

    /// Checkout payload for the current selection.
    pub fn order_payload(&self) -> OrderPayload {
        to_order_payload(&self.selection, &self.price(), &self.config.checkout)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Hand the order to `submitter` and close the session.
    ///
    /// Only allowed on the summary step with the confirmation ticked.
    pub fn submit<S>(&mut self, submitter: &mut S) -> Result<OrderPayload, BuilderError>
    where
        S: OrderSubmitter + ?Sized,
    {
        self.ensure_open()?;
        if self.step != Step::Summary {
            return Err(BuilderError::InvalidTransition {
                from: self.step.to_string(),
                to: "checkout".to_string(),
            });
        }
        if !self.confirmed {
            return Err(BuilderError::NotConfirmed);
        }

        let payload = self.order_payload();
        info!(
            title = %payload.product.title,
            pricing = payload.pricing,
            currency = %payload.currency,
            "submitting order"
        );
        submitter.dispatch(&payload);
        self.closed = true;
        Ok(payload)
    }

    /// Run one command and return the resulting snapshot.
    pub fn execute<S>(&mut self, command: &Command, submitter: &mut S) -> Result<Snapshot, BuilderError>
    where
        S: OrderSubmitter + ?Sized,
    {
        match command {
            Command::Select { field, value } => {
                self.apply_named(field, value)?;
            }
            Command::Next => {
                self.next()?;
            }
            Command::Previous => {
                self.previous()?;
            }
            Command::Confirm { confirmed } => self.set_confirmed(*confirmed)?,
            Command::Submit => {
                self.submit(submitter)?;
            }
        }
        Ok(self.snapshot())
    }
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}
