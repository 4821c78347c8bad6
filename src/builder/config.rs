//! Builder for constructing configurations.

use crate::builder::state::StateBuilder;
use crate::core::{Configuration, ConfigurationError, FsmError, StateDefinition, StateId};
use crate::machine::StateMachine;
use std::collections::BTreeMap;

/// Builder for constructing configurations with a fluent API.
///
/// Like the engine, the builder does not check that the initial state or
/// transition targets are among the configured states.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    initial: Option<StateId>,
    states: BTreeMap<StateId, StateDefinition>,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Define a state using a [`StateBuilder`].
    ///
    /// Defining the same state twice merges the transitions, with later
    /// registrations winning.
    pub fn state<F>(mut self, id: impl Into<StateId>, define: F) -> Self
    where
        F: FnOnce(StateBuilder) -> StateBuilder,
    {
        let id = id.into();
        let existing = self.states.remove(&id).unwrap_or_default();
        let definition = define(StateBuilder::from_definition(existing)).build();
        self.states.insert(id, definition);
        self
    }

    /// Add a pre-built state definition, replacing any existing one.
    pub fn add_state(mut self, id: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.states.insert(id.into(), definition);
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<Configuration, ConfigurationError> {
        let initial = self.initial.ok_or(ConfigurationError::MissingInitialState)?;

        Ok(self
            .states
            .into_iter()
            .fold(Configuration::new(initial), |config, (id, definition)| {
                config.with_state(id, definition)
            }))
    }

    /// Build the configuration and start a machine on it.
    pub fn build_machine(self) -> Result<StateMachine, FsmError> {
        Ok(StateMachine::new(self.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_initial_state() {
        let result = ConfigurationBuilder::new()
            .state("idle", |s| s.on("start", "running"))
            .build();

        assert_eq!(result, Err(ConfigurationError::MissingInitialState));
    }

    #[test]
    fn builder_allows_no_states() {
        let config = ConfigurationBuilder::new().initial("idle").build().unwrap();

        assert_eq!(config.initial(), "idle");
        assert!(config.states().is_empty());
    }

    #[test]
    fn fluent_api_builds_configuration() {
        let config = ConfigurationBuilder::new()
            .initial("idle")
            .state("idle", |s| s.on("start", "running"))
            .state("running", |s| s.on("stop", "idle").on("fail", "error"))
            .add_state("error", StateDefinition::new())
            .build()
            .unwrap();

        assert_eq!(config.states().len(), 3);
        assert_eq!(config.state("running").unwrap().target("fail"), Some("error"));
        assert!(config.state("error").unwrap().transitions().is_empty());
    }

    #[test]
    fn repeated_state_merges_transitions() {
        let config = ConfigurationBuilder::new()
            .initial("a")
            .state("a", |s| s.on("next", "b").on("back", "a"))
            .state("a", |s| s.on("next", "c"))
            .build()
            .unwrap();

        let a = config.state("a").unwrap();
        assert_eq!(a.target("next"), Some("c"));
        assert_eq!(a.target("back"), Some("a"));
    }

    #[test]
    fn build_machine_starts_in_initial_state() {
        let machine = ConfigurationBuilder::new()
            .initial("idle")
            .state("idle", |s| s.on("start", "running"))
            .build_machine()
            .unwrap();

        assert_eq!(machine.state(), "idle");
    }

    #[test]
    fn build_machine_reports_configuration_error() {
        let err = ConfigurationBuilder::new().build_machine().unwrap_err();

        assert_eq!(
            err,
            FsmError::Configuration(ConfigurationError::MissingInitialState)
        );
    }
}
