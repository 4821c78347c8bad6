//! fsm-engine: a data-driven finite state machine with undo/redo
//!
//! A machine is created from a declarative [`Configuration`]: an initial
//! state plus, for each state, the events it reacts to and where they lead.
//! The machine tracks the current state, applies event-driven transitions
//! and direct jumps, and keeps a two-way history so changes can be undone
//! and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: immutable description of states and transitions
//! - **StateMachine**: the only mutation path for state and history
//! - **History**: undo and redo stacks that move with the current state
//!
//! The initial state and transition targets are not validated up front. An
//! unknown state is reported when it is used, as
//! [`FsmError::StateNotFound`] from `trigger`.
//!
//! # Example
//!
//! ```rust
//! use fsm_engine::{Configuration, FsmError, StateDefinition, StateMachine};
//!
//! let config = Configuration::new("idle")
//!     .with_state("idle", StateDefinition::new().on("start", "running"))
//!     .with_state("running", StateDefinition::new().on("stop", "idle"));
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("start")?;
//! machine.trigger("stop")?;
//! assert_eq!(machine.state(), "idle");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//!
//! let err = machine.trigger("start").unwrap_err();
//! assert!(matches!(err, FsmError::InvalidTransition { .. }));
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{ConfigurationBuilder, StateBuilder};
pub use crate::core::{
    Configuration, ConfigurationError, EventId, FsmError, Result, StateDefinition, StateId,
    UndoHistory,
};
pub use crate::machine::StateMachine;
