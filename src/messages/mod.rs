//! Message types crossing the layer boundaries.
//!
//! Keyboard input becomes a [`UiEvent`], the app layer consumes events and
//! produces a [`RenderState`] snapshot for the draw code.

pub mod render;
pub mod ui_events;

pub use render::{DirectoryRow, RenderState};
pub use ui_events::UiEvent;
