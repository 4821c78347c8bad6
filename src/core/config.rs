//! Declarative machine configuration.
//!
//! A [`Configuration`] names the initial state and, for every state, the
//! events it reacts to and where each event leads. The engine never mutates
//! a configuration and performs no referential checks on it: the initial
//! state and transition targets are only looked up when they are used.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a state. Compared by exact string equality.
pub type StateId = String;

/// Identifier of an event. Compared by exact string equality.
pub type EventId = String;

/// Transitions available from a single state.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::StateDefinition;
///
/// let idle = StateDefinition::new().on("start", "running");
/// assert_eq!(idle.target("start"), Some("running"));
/// assert_eq!(idle.target("stop"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    transitions: BTreeMap<EventId, StateId>,
}

impl StateDefinition {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transition, replacing any previous target for `event`.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if one is registered.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether a transition is registered for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// All registered transitions, keyed by event.
    pub fn transitions(&self) -> &BTreeMap<EventId, StateId> {
        &self.transitions
    }
}

impl<E, S> FromIterator<(E, S)> for StateDefinition
where
    E: Into<EventId>,
    S: Into<StateId>,
{
    fn from_iter<I: IntoIterator<Item = (E, S)>>(iter: I) -> Self {
        Self {
            transitions: iter
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        }
    }
}

/// Complete machine description: the initial state and every state's
/// transitions.
///
/// Serializes as `{"initial": ..., "states": {id: {"transitions": {...}}}}`.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::{Configuration, StateDefinition};
///
/// let config = Configuration::new("idle")
///     .with_state("idle", StateDefinition::new().on("start", "running"))
///     .with_state("running", StateDefinition::new().on("stop", "idle"));
///
/// assert_eq!(config.initial(), "idle");
/// assert!(config.contains_state("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    initial: StateId,
    #[serde(default)]
    states: BTreeMap<StateId, StateDefinition>,
}

impl Configuration {
    /// Create a configuration with no states.
    ///
    /// `initial` is not checked against the state set.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: BTreeMap::new(),
        }
    }

    /// Add or replace a state definition.
    pub fn with_state(mut self, id: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.states.insert(id.into(), definition);
        self
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Definition of state `id`, if configured.
    pub fn state(&self, id: &str) -> Option<&StateDefinition> {
        self.states.get(id)
    }

    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// All configured state definitions, keyed by state.
    pub fn states(&self) -> &BTreeMap<StateId, StateDefinition> {
        &self.states
    }

    /// Identifiers of every configured state.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Identifiers of states that register a transition for `event`.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, definition)| definition.handles(event))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
