//! Event dispatch - maps UI events onto state transitions

use crate::app::state::AppState;
use crate::messages::UiEvent;

impl AppState {
    /// Handle a UI event, returns true if quit was requested
    pub fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // List navigation
            UiEvent::NextRow => self.next_row(),
            UiEvent::PrevRow => self.prev_row(),

            // Screen navigation
            UiEvent::OpenDirectory => self.open_directory(),
            UiEvent::LeaveDirectory => self.leave_directory(),

            // Modal lifecycle
            UiEvent::OpenAddForm => self.open_add_form(),
            UiEvent::OpenEditForm => self.open_edit_form(),
            UiEvent::OpenDeleteConfirm => self.open_delete_confirm(),
            UiEvent::CancelModal => self.cancel_modal(),
            UiEvent::SubmitModal => self.submit_modal(),

            // Form editing
            UiEvent::CharInput(c) => self.enter_char(c),
            UiEvent::Backspace => self.delete_char(),
            UiEvent::CursorLeft => self.move_cursor_left(),
            UiEvent::CursorRight => self.move_cursor_right(),
            UiEvent::NextField => self.next_field(),

            // Popups
            UiEvent::ToggleHelp => self.toggle_help(),
            UiEvent::CloseHelp => self.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Board;

    #[test]
    fn test_quit_is_reported() {
        let mut app = AppState::new(Board::new());
        assert!(app.handle_ui_event(UiEvent::Quit));
        assert!(!app.handle_ui_event(UiEvent::NextRow));
    }

    #[test]
    fn test_events_drive_the_modal_machine() {
        let mut app = AppState::new(Board::new());
        for ev in [
            UiEvent::OpenAddForm,
            UiEvent::CharInput('H'),
            UiEvent::CharInput('i'),
            UiEvent::SubmitModal,
        ] {
            app.handle_ui_event(ev);
        }
        assert_eq!(app.board.directories().len(), 1);
        assert_eq!(app.board.directories()[0].title, "Hi");
    }
}
