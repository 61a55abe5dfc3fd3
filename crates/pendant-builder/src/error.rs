//! Builder error types.

use crate::options::Field;
use crate::wizard::Step;
use thiserror::Error;

/// Errors that can occur while driving a builder session.
///
/// Every variant is non-destructive: the session is left exactly as it
/// was before the failing command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A required field is missing for the current step.
    #[error("{message}")]
    IncompleteSelection {
        step: Step,
        field: Field,
        message: String,
    },

    /// Navigation past the first or last step.
    #[error("Invalid step transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Submission attempted without ticking the confirmation box.
    #[error("Order must be confirmed before it can be submitted")]
    NotConfirmed,

    /// The order has already been submitted.
    #[error("Session closed: order already submitted")]
    SessionClosed,

    /// Selection event for a field the builder does not know.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Invalid configuration or catalog data.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BuilderError {
    fn from(e: serde_json::Error) -> Self {
        BuilderError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_selection_displays_message() {
        let err = BuilderError::IncompleteSelection {
            step: Step::PendantType,
            field: Field::PendantType,
            message: "Please select a pendant type before continuing.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Please select a pendant type before continuing."
        );
    }

    #[test]
    fn test_from_serde_error() {
        let e = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: BuilderError = e.into();
        assert!(matches!(err, BuilderError::SerializationError(_)));
    }
}
