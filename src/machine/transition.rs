//! Pure transition lookup.

use crate::core::{Configuration, FsmError, Result};

/// What kind of move produced a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Direct jump via `change_state`.
    Jump,
    /// Event-driven move via `trigger`.
    Trigger,
    /// Return to the initial state via `reset`.
    Reset,
    Undo,
    Redo,
}

impl MoveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::Trigger => "trigger",
            Self::Reset => "reset",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }

    /// Whether this move discards redoable states.
    pub fn clears_redo(&self) -> bool {
        matches!(self, Self::Jump | Self::Trigger)
    }
}

/// Resolve the target of `event` from `current` (pure).
///
/// The target is returned as configured; it is not checked against the
/// state set.
pub fn resolve<'a>(config: &'a Configuration, current: &str, event: &str) -> Result<&'a str> {
    let definition = config
        .state(current)
        .ok_or_else(|| FsmError::StateNotFound {
            state: current.to_string(),
        })?;

    definition
        .target(event)
        .ok_or_else(|| FsmError::InvalidTransition {
            state: current.to_string(),
            event: event.to_string(),
        })
}

/// Check that `target` is a configured state (pure).
pub fn validate_jump<'a>(config: &Configuration, target: &'a str) -> Result<&'a str> {
    if config.contains_state(target) {
        Ok(target)
    } else {
        Err(FsmError::InvalidState {
            state: target.to_string(),
        })
    }
}
