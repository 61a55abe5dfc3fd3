//! Selection module.
//!
//! Contains the selection state and the reconciler that keeps it consistent.

mod reconcile;
mod state;

pub use reconcile::{apply, Change};
pub use state::{AddOns, FieldOrigin, Selection, Tracked};
