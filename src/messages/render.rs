//! Render state - snapshot handed from the app layer to the draw code

use crate::app::state::Modal;
use crate::messages::ui_events::Screen;

/// One row of the directory list
#[derive(Debug, Clone)]
pub struct DirectoryRow {
    pub title: String,
    pub message_count: usize,
}

/// Complete state needed by the UI to render a frame
#[derive(Debug, Clone)]
pub struct RenderState {
    // Navigation
    pub screen: Screen,
    pub open_directory: Option<String>,

    // Directory screen
    pub directories: Vec<DirectoryRow>,
    pub selected_directory: usize,

    // Message screen
    pub messages: Vec<String>,
    pub selected_message: usize,

    // Modal
    pub modal: Modal,
    pub cursor_position: usize,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            screen: Screen::DirectoryList,
            open_directory: None,
            directories: Vec::new(),
            selected_directory: 0,
            messages: Vec::new(),
            selected_message: 0,
            modal: Modal::None,
            cursor_position: 0,
            show_help: false,
        }
    }
}
