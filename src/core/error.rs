//! Error types for machine construction and state changes.

use crate::core::config::{EventId, StateId};
use thiserror::Error;

/// Result type alias for fallible machine operations.
pub type Result<T> = std::result::Result<T, FsmError>;

/// Errors raised while obtaining a usable configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("No configuration supplied")]
    Missing,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}

/// Errors returned by state machine operations.
///
/// A failing operation never mutates the machine: the current state and both
/// history stacks are exactly as they were before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Direct jump to a state that is not configured.
    #[error("State '{state}' is not defined in the configuration")]
    InvalidState { state: StateId },

    /// Event has no transition registered on the current state.
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: StateId, event: EventId },

    /// The current state itself is not configured. The initial state and
    /// transition targets are only checked when they are used.
    #[error("Current state '{state}' is not defined in the configuration")]
    StateNotFound { state: StateId },
}

impl FsmError {
    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            FsmError::Configuration(_) => "CONFIGURATION_ERROR",
            FsmError::InvalidState { .. } => "INVALID_STATE",
            FsmError::InvalidTransition { .. } => "INVALID_TRANSITION",
            FsmError::StateNotFound { .. } => "STATE_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_converts_into_fsm_error() {
        let err: FsmError = ConfigurationError::Missing.into();
        assert_eq!(err, FsmError::Configuration(ConfigurationError::Missing));
        assert_eq!(err.code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn messages_name_the_offending_identifiers() {
        let err = FsmError::InvalidTransition {
            state: "idle".to_string(),
            event: "stop".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No transition for event 'stop' from state 'idle'"
        );

        let err = FsmError::InvalidState {
            state: "paused".to_string(),
        };
        assert!(err.to_string().contains("'paused'"));
    }

    #[test]
    fn codes_are_distinct() {
        let errors = [
            FsmError::Configuration(ConfigurationError::Missing),
            FsmError::InvalidState {
                state: "a".to_string(),
            },
            FsmError::InvalidTransition {
                state: "a".to_string(),
                event: "e".to_string(),
            },
            FsmError::StateNotFound {
                state: "a".to_string(),
            },
        ];

        let mut codes: Vec<_> = errors.iter().map(FsmError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
