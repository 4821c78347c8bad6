//! Builder for a single state's transitions.

use crate::core::{EventId, StateDefinition, StateId};

/// Builder for one state's outgoing transitions.
#[derive(Debug, Default)]
pub struct StateBuilder {
    definition: StateDefinition,
}

impl StateBuilder {
    /// Create a builder with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_definition(definition: StateDefinition) -> Self {
        Self { definition }
    }

    /// Register `event` to move to `target`.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.definition = self.definition.on(event, target);
        self
    }

    /// Finish the state definition.
    pub fn build(self) -> StateDefinition {
        self.definition
    }
}
