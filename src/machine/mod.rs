//! The state machine engine.
//!
//! Transition lookup is pure and lives in [`transition`]; [`StateMachine`]
//! applies the result and keeps the undo/redo history in step with the
//! current state.
//!
//! # Result shapes
//!
//! - `change_state` and `trigger` return [`Result`](crate::core::Result):
//!   an error means the request itself was invalid.
//! - `undo` and `redo` return `bool`: `false` means there was nothing to
//!   restore, which is not an error.

mod engine;
pub mod transition;

pub use engine::StateMachine;
pub use transition::MoveKind;
