//! State machine that interprets a configuration and tracks history.

use crate::core::{Configuration, ConfigurationError, Result, StateId, UndoHistory};
use crate::machine::transition::{resolve, validate_jump, MoveKind};
use std::sync::Arc;
use tracing::{debug, trace};

/// Data-driven state machine with undo/redo.
///
/// The machine owns its current state and history; the configuration is
/// shared and never modified. Every mutation goes through a method, and a
/// method that returns an error leaves the machine untouched.
///
/// # Example
///
/// ```rust
/// use fsm_engine::fsm_config;
/// use fsm_engine::StateMachine;
///
/// let config = fsm_config! {
///     initial: "idle",
///     "idle" => { "start" => "running" },
///     "running" => { "stop" => "idle" },
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<Configuration>,
    current: StateId,
    history: UndoHistory,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The initial state is not checked against the configured states; an
    /// unknown initial state surfaces as
    /// [`FsmError::StateNotFound`](crate::core::FsmError::StateNotFound) on
    /// the first `trigger`.
    pub fn new(config: impl Into<Arc<Configuration>>) -> Self {
        let config = config.into();
        let current = config.initial().to_string();
        debug!(initial = %current, states = config.states().len(), "state machine created");
        Self {
            config,
            current,
            history: UndoHistory::new(),
        }
    }

    /// Create a machine from a configuration that may be absent.
    pub fn try_new(config: Option<impl Into<Arc<Configuration>>>) -> Result<Self> {
        let config = config.ok_or(ConfigurationError::Missing)?;
        Ok(Self::new(config))
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn initial(&self) -> &str {
        self.config.initial()
    }

    /// Configured states, optionally restricted to those that register a
    /// transition for `event`. Order is unspecified.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.state_ids().collect(),
            Some(event) => self.config.states_handling(event),
        }
    }

    /// Events registered on the current state.
    ///
    /// Empty when the current state is not configured.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state(&self.current)
            .map(|definition| definition.transitions().keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether `trigger(event)` would succeed from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        resolve(&self.config, &self.current, event).is_ok()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo/redo stacks (read-only).
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Jump directly to `target`, ignoring transition rules.
    ///
    /// Fails with `InvalidState` if `target` is not configured. Discards
    /// redoable states.
    pub fn change_state(&mut self, target: &str) -> Result<()> {
        let target = validate_jump(&self.config, target).inspect_err(|err| {
            debug!(from = %self.current, error = %err, "change_state rejected");
        })?;
        self.apply(target.to_string(), MoveKind::Jump);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// Fails with `InvalidTransition` if the current state has no transition
    /// for `event`, or `StateNotFound` if the current state is not
    /// configured. The target is not checked. Discards redoable states.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let target = resolve(&self.config, &self.current, event)
            .inspect_err(|err| {
                debug!(from = %self.current, event, error = %err, "trigger rejected");
            })?
            .to_string();
        self.apply(target, MoveKind::Trigger);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// The previous state becomes undoable. Redoable states are kept.
    pub fn reset(&mut self) {
        let initial = self.config.initial().to_string();
        self.apply(initial, MoveKind::Reset);
    }

    /// Restore the previous state.
    ///
    /// Returns `false` and changes nothing when there is no history.
    pub fn undo(&mut self) -> bool {
        self.restore(MoveKind::Undo)
    }

    /// Re-apply the most recently undone state.
    ///
    /// Returns `false` and changes nothing when nothing was undone.
    pub fn redo(&mut self) -> bool {
        self.restore(MoveKind::Redo)
    }

    /// Forget all undo and redo history. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(
            state = %self.current,
            undo = self.history.undo_stack().len(),
            redo = self.history.redo_stack().len(),
            "history cleared"
        );
        self.history.clear();
    }

    fn apply(&mut self, target: StateId, kind: MoveKind) {
        let previous = std::mem::replace(&mut self.current, target);
        debug!(kind = kind.as_str(), from = %previous, to = %self.current, "state changed");
        if kind.clears_redo() {
            self.history.record(previous);
        } else {
            self.history.record_preserving_redo(previous);
        }
    }

    fn restore(&mut self, kind: MoveKind) -> bool {
        let current = self.current.clone();
        let restored = match kind {
            MoveKind::Redo => self.history.redo(current),
            _ => self.history.undo(current),
        };

        let Some(state) = restored else {
            trace!(kind = kind.as_str(), state = %self.current, "nothing to restore");
            return false;
        };

        debug!(kind = kind.as_str(), from = %self.current, to = %state, "state restored");
        self.current = state;
        true
    }
}
