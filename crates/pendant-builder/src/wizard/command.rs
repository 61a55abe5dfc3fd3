//! Serializable builder commands.

use serde::{Deserialize, Serialize};

/// One user action against a builder session.
///
/// Scripts and adapters drive a session with a list of these:
///
/// ```json
/// [
///   { "action": "select", "field": "pendant-type", "value": "3d_enamel" },
///   { "action": "next" },
///   { "action": "confirm" },
///   { "action": "submit" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Command {
    /// Selection event for a named field with a raw storefront value.
    Select { field: String, value: String },
    /// Validate the current step and move forward.
    Next,
    /// Move back.
    Previous,
    /// Tick or untick the confirmation box on the summary step.
    Confirm {
        #[serde(default = "default_confirmed")]
        confirmed: bool,
    },
    /// Hand the order to the submitter.
    Submit,
}

fn default_confirmed() -> bool {
    true
}

impl Command {
    pub fn select(field: impl Into<String>, value: impl Into<String>) -> Self {
        Command::Select {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Select { .. } => "select",
            Command::Next => "next",
            Command::Previous => "previous",
            Command::Confirm { .. } => "confirm",
            Command::Submit => "submit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_list() {
        let commands: Vec<Command> = serde_json::from_str(
            r#"[
                {"action": "select", "field": "chain-type", "value": "chain_type_none"},
                {"action": "next"},
                {"action": "previous"},
                {"action": "confirm"},
                {"action": "confirm", "confirmed": false},
                {"action": "submit"}
            ]"#,
        )
        .unwrap();

        assert_eq!(commands[0], Command::select("chain-type", "chain_type_none"));
        assert_eq!(commands[1], Command::Next);
        assert_eq!(commands[2], Command::Previous);
        assert_eq!(commands[3], Command::Confirm { confirmed: true });
        assert_eq!(commands[4], Command::Confirm { confirmed: false });
        assert_eq!(commands[5].name(), "submit");
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(serde_json::from_str::<Command>(r#"{"action": "jump"}"#).is_err());
    }
}
