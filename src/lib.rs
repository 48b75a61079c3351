//! # Noticeboard
//!
//! A terminal notice board: named directories, each holding an ordered list
//! of short text messages, all managed from the keyboard.
//!
//! ## Features
//! - Directory list screen with add / rename / delete
//! - Per-directory message screen with add / edit / delete
//! - Confirmation dialogs before any destructive action
//! - Stable directory ids, so renames never touch the message map
//!
//! ## Architecture
//! Layered, single-threaded:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - state machine processing UI events
//! - Board - the coordinator owning both collections

pub mod app;
pub mod constants;
pub mod messages;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use app::{AppState, ConfirmChoice, Modal};
pub use messages::{DirectoryRow, RenderState, UiEvent};
pub use models::{Board, Directory, DirectoryId};
