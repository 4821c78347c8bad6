//! Undo/redo history of visited states.
//!
//! Two stacks move in lockstep with the machine's current state: the undo
//! stack holds states that were left behind, the redo stack holds states
//! that were undone. The current state itself lives on the machine and is
//! passed in whenever it has to be pushed onto one of the stacks.

use super::config::StateId;

/// Paired undo and redo stacks.
///
/// Both stacks are last-in-first-out. Slices returned by
/// [`undo_stack`](Self::undo_stack) and [`redo_stack`](Self::redo_stack) are
/// ordered oldest first, so the next state to be restored is the last
/// element.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::UndoHistory;
///
/// let mut history = UndoHistory::new();
/// history.record("idle".to_string());
///
/// // Undo from "running" restores "idle" and makes "running" redoable.
/// assert_eq!(history.undo("running".to_string()), Some("idle".to_string()));
/// assert_eq!(history.redo_stack(), ["running"]);
///
/// // Nothing left to undo: the current state is handed back untouched.
/// assert_eq!(history.undo("idle".to_string()), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoHistory {
    undo: Vec<StateId>,
    redo: Vec<StateId>,
}

impl UndoHistory {
    /// Create a history with both stacks empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward move away from `previous`.
    ///
    /// Any redoable states are discarded.
    pub fn record(&mut self, previous: StateId) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Record a move away from `previous` while keeping the redo stack.
    pub fn record_preserving_redo(&mut self, previous: StateId) {
        self.undo.push(previous);
    }

    /// Step back from `current`.
    ///
    /// Returns the state to restore, or `None` without touching either stack
    /// when there is nothing to undo.
    pub fn undo(&mut self, current: StateId) -> Option<StateId> {
        let restored = self.undo.pop()?;
        self.redo.push(current);
        Some(restored)
    }

    /// Step forward from `current`.
    ///
    /// Returns the state to restore, or `None` without touching either stack
    /// when there is nothing to redo.
    pub fn redo(&mut self, current: StateId) -> Option<StateId> {
        let restored = self.redo.pop()?;
        self.undo.push(current);
        Some(restored)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// States available to undo, oldest first.
    pub fn undo_stack(&self) -> &[StateId] {
        &self.undo
    }

    /// States available to redo, oldest first.
    pub fn redo_stack(&self) -> &[StateId] {
        &self.redo
    }

    /// Whether both stacks are empty.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }
}
