//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::{FormField, ModalKind, Screen};
use crate::messages::{DirectoryRow, RenderState};
use crate::models::Board;

/// Highlighted button of a confirmation dialog
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ConfirmChoice {
    #[default]
    Cancel,
    Delete,
}

/// Modal state machine. At most one modal is open at a time; dismissing a
/// modal discards whatever was typed into it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    #[default]
    None,
    AddDirectory {
        title: String,
        initial_message: String,
        field: FormField,
    },
    RenameDirectory {
        old_title: String,
        input: String,
    },
    ConfirmDeleteDirectory {
        title: String,
        choice: ConfirmChoice,
    },
    AddMessage {
        input: String,
    },
    EditMessage {
        index: usize,
        input: String,
    },
    ConfirmDeleteMessage {
        index: usize,
        choice: ConfirmChoice,
    },
}

impl Modal {
    pub fn kind(&self) -> ModalKind {
        match self {
            Modal::None => ModalKind::None,
            Modal::AddDirectory { .. }
            | Modal::RenameDirectory { .. }
            | Modal::AddMessage { .. }
            | Modal::EditMessage { .. } => ModalKind::Form,
            Modal::ConfirmDeleteDirectory { .. } | Modal::ConfirmDeleteMessage { .. } => {
                ModalKind::Confirm
            }
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    /// The coordinator-owned collections; views only dispatch intents
    pub board: Board,

    // Navigation
    pub screen: Screen,
    /// Title of the directory whose messages are on display, set when
    /// navigating in and cleared on the way back
    pub current_directory: Option<String>,

    // List selections
    pub selected_directory: usize,
    pub selected_message: usize,

    // Modal state
    pub modal: Modal,
    pub cursor_position: usize,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Board::seed())
    }
}

impl AppState {
    pub fn new(board: Board) -> Self {
        AppState {
            board,
            screen: Screen::DirectoryList,
            current_directory: None,
            selected_directory: 0,
            selected_message: 0,
            modal: Modal::None,
            cursor_position: 0,
            show_help: false,
        }
    }

    /// Title of the directory row currently under the cursor
    pub fn selected_title(&self) -> Option<&str> {
        self.board
            .directories()
            .get(self.selected_directory)
            .map(|d| d.title.as_str())
    }

    /// Get the current form input content
    pub fn current_input(&self) -> &str {
        match &self.modal {
            Modal::AddDirectory {
                title,
                initial_message,
                field,
            } => match field {
                FormField::Title => title,
                FormField::InitialMessage => initial_message,
            },
            Modal::RenameDirectory { input, .. }
            | Modal::AddMessage { input }
            | Modal::EditMessage { input, .. } => input,
            _ => "",
        }
    }

    /// Get mutable reference to the current form input, if a form is open
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match &mut self.modal {
            Modal::AddDirectory {
                title,
                initial_message,
                field,
            } => Some(match field {
                FormField::Title => title,
                FormField::InitialMessage => initial_message,
            }),
            Modal::RenameDirectory { input, .. }
            | Modal::AddMessage { input }
            | Modal::EditMessage { input, .. } => Some(input),
            _ => None,
        }
    }

    /// Convert state to RenderState for the UI
    pub fn to_render_state(&self) -> RenderState {
        let directories = self
            .board
            .directories()
            .iter()
            .map(|d| DirectoryRow {
                title: d.title.clone(),
                message_count: self.board.messages(&d.title).len(),
            })
            .collect();

        let messages = self
            .current_directory
            .as_deref()
            .map(|title| self.board.messages(title).to_vec())
            .unwrap_or_default();

        RenderState {
            screen: self.screen,
            directories,
            selected_directory: self.selected_directory,
            open_directory: self.current_directory.clone(),
            messages,
            selected_message: self.selected_message,
            modal: self.modal.clone(),
            cursor_position: self.cursor_position,
            show_help: self.show_help,
        }
    }
}
