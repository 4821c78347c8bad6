//! Core data types: configuration, history and errors.
//!
//! This module contains the pieces the engine is built from:
//! - The declarative `Configuration` the machine interprets
//! - The paired undo/redo stacks
//! - Error types for construction and state changes
//!
//! Nothing here knows about the current state; `StateMachine` ties them
//! together.

mod config;
mod error;
mod history;

pub use config::{Configuration, EventId, StateDefinition, StateId};
pub use error::{ConfigurationError, FsmError, Result};
pub use history::UndoHistory;
