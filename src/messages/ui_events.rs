//! UI events - messages from the input layer to the app layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which screen is on display
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Screen {
    #[default]
    DirectoryList,
    MessageList,
}

/// Kind of modal currently open (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ModalKind {
    #[default]
    None,
    /// Text form: add/rename directory, add/edit message
    Form,
    /// Cancel/Delete confirmation dialog
    Confirm,
}

/// Field focus inside the add-directory form
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum FormField {
    #[default]
    Title,
    InitialMessage,
}

/// Events generated from user input
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // List navigation
    NextRow,
    PrevRow,

    // Screen navigation
    OpenDirectory,
    LeaveDirectory,

    // Modal lifecycle
    OpenAddForm,
    OpenEditForm,
    OpenDeleteConfirm,
    CancelModal,
    SubmitModal,

    // Form editing (Left/Right also move the confirm dialog choice)
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    NextField,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    screen: Screen,
    modal: ModalKind,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    // Modals capture all input while open
    match modal {
        ModalKind::Form => {
            return match key.code {
                KeyCode::Esc => Some(UiEvent::CancelModal),
                KeyCode::Enter => Some(UiEvent::SubmitModal),
                KeyCode::Tab => Some(UiEvent::NextField),
                KeyCode::Left => Some(UiEvent::CursorLeft),
                KeyCode::Right => Some(UiEvent::CursorRight),
                KeyCode::Backspace => Some(UiEvent::Backspace),
                KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
                _ => None,
            };
        }
        ModalKind::Confirm => {
            return match key.code {
                KeyCode::Esc => Some(UiEvent::CancelModal),
                KeyCode::Enter => Some(UiEvent::SubmitModal),
                KeyCode::Left | KeyCode::BackTab => Some(UiEvent::CursorLeft),
                KeyCode::Right | KeyCode::Tab => Some(UiEvent::CursorRight),
                _ => None,
            };
        }
        ModalKind::None => {}
    }

    // Keys shared by both screens
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Up | KeyCode::Char('k') => return Some(UiEvent::PrevRow),
        KeyCode::Down | KeyCode::Char('j') => return Some(UiEvent::NextRow),
        KeyCode::Char('a') => return Some(UiEvent::OpenAddForm),
        KeyCode::Char('e') => return Some(UiEvent::OpenEditForm),
        KeyCode::Char('d') => return Some(UiEvent::OpenDeleteConfirm),
        _ => {}
    }

    match screen {
        Screen::DirectoryList => match key.code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::OpenDirectory),
            _ => None,
        },
        Screen::MessageList => match key.code {
            KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::LeaveDirectory),
            _ => None,
        },
    }
}
