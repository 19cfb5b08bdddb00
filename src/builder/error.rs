//! Build errors for the coordinator builder.

use thiserror::Error;

/// Errors that can occur when building a coordinator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("The {role} action type is empty")]
    EmptyActionType { role: &'static str },

    #[error("Action type '{action_type}' is used for both {first} and {second}")]
    DuplicateActionType {
        action_type: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Init type '{action_type}' is shadowed by the {role} action type")]
    InitTypeShadowed {
        action_type: String,
        role: &'static str,
    },

    #[error("Initial history holds {length} versions, more than the limit of {limit}")]
    InitialHistoryExceedsLimit { length: usize, limit: usize },
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
