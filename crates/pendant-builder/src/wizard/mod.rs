//! Step-by-step builder flow.
//!
//! A [`BuilderSession`] walks the seven [`Step`]s, applying selection
//! events, validating each step before moving on and producing a
//! [`Snapshot`] for rendering after every command.

mod command;
mod session;
mod snapshot;
mod step;

pub use command::Command;
pub use session::BuilderSession;
pub use snapshot::{ChainTokens, Snapshot, StepStatus};
pub use step::Step;
