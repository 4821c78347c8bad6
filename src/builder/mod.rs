//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and the `fsm_config!` macro for
//! assembling a [`Configuration`](crate::core::Configuration) in code.

pub mod config;
pub mod macros;
pub mod state;

pub use config::ConfigurationBuilder;
pub use state::StateBuilder;
