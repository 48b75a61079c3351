//! App layer - central state management and command processing
//!
//! The app owns the board plus all UI state, consumes UI events, and emits
//! render-state snapshots for the draw loop.

pub mod commands;
pub mod dispatch;
pub mod state;

pub use state::{AppState, ConfirmChoice, Modal};
