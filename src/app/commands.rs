//! Command handlers - state transitions for every UI event
//!
//! All mutation of the board flows through these methods; the draw code only
//! ever sees a RenderState snapshot.

use crate::app::state::{AppState, ConfirmChoice, Modal};
use crate::messages::ui_events::{FormField, ModalKind, Screen};

impl AppState {
    // ========================
    // List navigation
    // ========================

    pub fn next_row(&mut self) {
        match self.screen {
            Screen::DirectoryList => {
                let len = self.board.directories().len();
                if len > 0 {
                    self.selected_directory = (self.selected_directory + 1) % len;
                }
            }
            Screen::MessageList => {
                let len = self.open_messages_len();
                if len > 0 {
                    self.selected_message = (self.selected_message + 1) % len;
                }
            }
        }
    }

    pub fn prev_row(&mut self) {
        match self.screen {
            Screen::DirectoryList => {
                let len = self.board.directories().len();
                if len > 0 {
                    self.selected_directory =
                        self.selected_directory.checked_sub(1).unwrap_or(len - 1);
                }
            }
            Screen::MessageList => {
                let len = self.open_messages_len();
                if len > 0 {
                    self.selected_message =
                        self.selected_message.checked_sub(1).unwrap_or(len - 1);
                }
            }
        }
    }

    fn open_messages_len(&self) -> usize {
        self.current_directory
            .as_deref()
            .map(|t| self.board.messages(t).len())
            .unwrap_or(0)
    }

    // ========================
    // Screen navigation
    // ========================

    /// Navigate into the selected directory's message screen
    pub fn open_directory(&mut self) {
        if let Some(title) = self.selected_title().map(str::to_string) {
            self.current_directory = Some(title);
            self.screen = Screen::MessageList;
            self.selected_message = 0;
        }
    }

    /// Pop back to the directory list
    pub fn leave_directory(&mut self) {
        self.screen = Screen::DirectoryList;
        self.current_directory = None;
        self.selected_message = 0;
    }

    // ========================
    // Modal lifecycle
    // ========================

    pub fn open_add_form(&mut self) {
        self.modal = match self.screen {
            Screen::DirectoryList => Modal::AddDirectory {
                title: String::new(),
                initial_message: String::new(),
                field: FormField::Title,
            },
            Screen::MessageList => Modal::AddMessage {
                input: String::new(),
            },
        };
        self.cursor_position = 0;
    }

    /// Open the rename/edit form pre-filled with the current value.
    /// No-op when the list under the cursor is empty.
    pub fn open_edit_form(&mut self) {
        match self.screen {
            Screen::DirectoryList => {
                if let Some(title) = self.selected_title().map(str::to_string) {
                    self.cursor_position = title.len();
                    self.modal = Modal::RenameDirectory {
                        old_title: title.clone(),
                        input: title,
                    };
                }
            }
            Screen::MessageList => {
                let Some(title) = self.current_directory.as_deref() else {
                    return;
                };
                if let Some(text) = self.board.messages(title).get(self.selected_message) {
                    let input = text.clone();
                    self.cursor_position = input.len();
                    self.modal = Modal::EditMessage {
                        index: self.selected_message,
                        input,
                    };
                }
            }
        }
    }

    /// Open the delete confirmation dialog, defaulting to Cancel
    pub fn open_delete_confirm(&mut self) {
        match self.screen {
            Screen::DirectoryList => {
                if let Some(title) = self.selected_title().map(str::to_string) {
                    self.modal = Modal::ConfirmDeleteDirectory {
                        title,
                        choice: ConfirmChoice::Cancel,
                    };
                }
            }
            Screen::MessageList => {
                if self.selected_message < self.open_messages_len() {
                    self.modal = Modal::ConfirmDeleteMessage {
                        index: self.selected_message,
                        choice: ConfirmChoice::Cancel,
                    };
                }
            }
        }
    }

    /// Dismiss the modal, discarding any pending input
    pub fn cancel_modal(&mut self) {
        self.modal = Modal::None;
    }

    /// Commit the open modal. Rejected form input (blank text, duplicate or
    /// colliding title) leaves the form open and the board untouched; a
    /// confirm dialog acts on whichever button is highlighted.
    pub fn submit_modal(&mut self) {
        let modal = std::mem::take(&mut self.modal);
        match modal {
            Modal::None => {}

            Modal::AddDirectory {
                title,
                initial_message,
                field,
            } => {
                if self.board.add_directory(&title, &initial_message) {
                    self.selected_directory = self.board.directories().len() - 1;
                    self.cursor_position = 0;
                } else {
                    self.modal = Modal::AddDirectory {
                        title,
                        initial_message,
                        field,
                    };
                }
            }

            Modal::RenameDirectory { old_title, input } => {
                if self.board.rename_directory(&old_title, &input) {
                    self.cursor_position = 0;
                } else {
                    self.modal = Modal::RenameDirectory { old_title, input };
                }
            }

            Modal::ConfirmDeleteDirectory { title, choice } => {
                if choice == ConfirmChoice::Delete {
                    self.board.delete_directory(&title);
                    self.clamp_directory_selection();
                }
            }

            Modal::AddMessage { input } => {
                let Some(title) = self.current_directory.clone() else {
                    return;
                };
                if self.board.add_message(&title, &input) {
                    self.selected_message = self.board.messages(&title).len() - 1;
                    self.cursor_position = 0;
                } else {
                    self.modal = Modal::AddMessage { input };
                }
            }

            Modal::EditMessage { index, input } => {
                let Some(title) = self.current_directory.clone() else {
                    return;
                };
                if self.board.edit_message(&title, index, &input) {
                    self.cursor_position = 0;
                } else {
                    self.modal = Modal::EditMessage { index, input };
                }
            }

            Modal::ConfirmDeleteMessage { index, choice } => {
                if choice == ConfirmChoice::Delete {
                    if let Some(title) = self.current_directory.clone() {
                        self.board.delete_message(&title, index);
                    }
                    self.clamp_message_selection();
                }
            }
        }
    }

    fn clamp_directory_selection(&mut self) {
        let len = self.board.directories().len();
        if self.selected_directory >= len {
            self.selected_directory = len.saturating_sub(1);
        }
    }

    fn clamp_message_selection(&mut self) {
        let len = self.open_messages_len();
        if self.selected_message >= len {
            self.selected_message = len.saturating_sub(1);
        }
    }

    // ========================
    // Form editing
    // ========================

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            if cursor_pos <= input.len() {
                input.insert(cursor_pos, c);
                self.cursor_position = cursor_pos + c.len_utf8();
            }
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.modal.kind() == ModalKind::Confirm {
            self.set_confirm_choice(ConfirmChoice::Cancel);
            return;
        }
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.modal.kind() == ModalKind::Confirm {
            self.set_confirm_choice(ConfirmChoice::Delete);
            return;
        }
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    fn set_confirm_choice(&mut self, new_choice: ConfirmChoice) {
        match &mut self.modal {
            Modal::ConfirmDeleteDirectory { choice, .. }
            | Modal::ConfirmDeleteMessage { choice, .. } => *choice = new_choice,
            _ => {}
        }
    }

    /// Tab inside the add-directory form switches between title and
    /// initial-message fields
    pub fn next_field(&mut self) {
        if let Modal::AddDirectory { field, .. } = &mut self.modal {
            *field = match field {
                FormField::Title => FormField::InitialMessage,
                FormField::InitialMessage => FormField::Title,
            };
            self.cursor_position = self.current_input().len();
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Board;

    fn app_with(titles: &[&str]) -> AppState {
        let mut board = Board::new();
        for t in titles {
            board.add_directory(t, "");
        }
        AppState::new(board)
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            app.enter_char(c);
        }
    }

    #[test]
    fn test_add_directory_flow() {
        let mut app = app_with(&[]);
        app.open_add_form();
        type_str(&mut app, "Club Notices");
        app.next_field();
        type_str(&mut app, "Meeting Friday");
        app.submit_modal();

        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.board.directories().len(), 1);
        assert_eq!(app.board.messages("Club Notices"), ["Meeting Friday"]);
        assert_eq!(app.selected_directory, 0);
    }

    #[test]
    fn test_blank_title_keeps_form_open() {
        let mut app = app_with(&[]);
        app.open_add_form();
        type_str(&mut app, "   ");
        app.submit_modal();

        assert!(matches!(app.modal, Modal::AddDirectory { .. }));
        assert!(app.board.directories().is_empty());
    }

    #[test]
    fn test_duplicate_title_keeps_form_open() {
        let mut app = app_with(&["A"]);
        app.open_add_form();
        type_str(&mut app, "A");
        app.submit_modal();

        assert!(matches!(app.modal, Modal::AddDirectory { .. }));
        assert_eq!(app.board.directories().len(), 1);
    }

    #[test]
    fn test_cancel_discards_pending_input() {
        let mut app = app_with(&[]);
        app.open_add_form();
        type_str(&mut app, "Drafts");
        app.cancel_modal();

        assert_eq!(app.modal, Modal::None);
        assert!(app.board.directories().is_empty());
    }

    #[test]
    fn test_rename_form_is_prefilled() {
        let mut app = app_with(&["Old Name"]);
        app.open_edit_form();

        match &app.modal {
            Modal::RenameDirectory { old_title, input } => {
                assert_eq!(old_title, "Old Name");
                assert_eq!(input, "Old Name");
            }
            other => panic!("unexpected modal: {other:?}"),
        }
        assert_eq!(app.cursor_position, "Old Name".len());
    }

    #[test]
    fn test_rename_collision_keeps_form_open() {
        let mut app = app_with(&["A", "B"]);
        app.open_edit_form(); // renames "A"
        // Replace the pre-filled text with the colliding title
        app.delete_char();
        type_str(&mut app, "B");
        app.submit_modal();

        assert!(matches!(app.modal, Modal::RenameDirectory { .. }));
        assert!(app.board.contains("A"));
    }

    #[test]
    fn test_confirm_defaults_to_cancel() {
        let mut app = app_with(&["A"]);
        app.open_delete_confirm();
        app.submit_modal();

        assert_eq!(app.modal, Modal::None);
        assert!(app.board.contains("A"));
    }

    #[test]
    fn test_confirm_delete_directory() {
        let mut app = app_with(&["A", "B"]);
        app.next_row();
        app.open_delete_confirm();
        app.move_cursor_right(); // highlight Delete
        app.submit_modal();

        assert!(!app.board.contains("B"));
        assert_eq!(app.selected_directory, 0);
    }

    #[test]
    fn test_selection_clamps_after_last_row_deleted() {
        let mut app = app_with(&["A"]);
        app.open_delete_confirm();
        app.move_cursor_right();
        app.submit_modal();

        assert!(app.board.directories().is_empty());
        assert_eq!(app.selected_directory, 0);
    }

    #[test]
    fn test_open_and_leave_directory() {
        let mut app = app_with(&["A"]);
        app.board.add_message("A", "m1");

        app.open_directory();
        assert_eq!(app.screen, Screen::MessageList);
        assert_eq!(app.current_directory.as_deref(), Some("A"));

        app.leave_directory();
        assert_eq!(app.screen, Screen::DirectoryList);
        assert_eq!(app.current_directory, None);
    }

    #[test]
    fn test_message_add_edit_delete_flow() {
        let mut app = app_with(&["A"]);
        app.open_directory();

        app.open_add_form();
        type_str(&mut app, "first notice");
        app.submit_modal();
        assert_eq!(app.board.messages("A"), ["first notice"]);
        assert_eq!(app.selected_message, 0);

        app.open_edit_form();
        assert!(matches!(app.modal, Modal::EditMessage { index: 0, .. }));
        type_str(&mut app, "!");
        app.submit_modal();
        assert_eq!(app.board.messages("A"), ["first notice!"]);

        app.open_delete_confirm();
        app.move_cursor_right();
        app.submit_modal();
        assert!(app.board.messages("A").is_empty());
    }

    #[test]
    fn test_edit_on_empty_list_is_noop() {
        let mut app = app_with(&[]);
        app.open_edit_form();
        assert_eq!(app.modal, Modal::None);

        let mut app = app_with(&["A"]);
        app.open_directory();
        app.open_edit_form();
        assert_eq!(app.modal, Modal::None);
        app.open_delete_confirm();
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn test_confirm_choice_toggles() {
        let mut app = app_with(&["A"]);
        app.open_delete_confirm();
        app.move_cursor_right();
        match &app.modal {
            Modal::ConfirmDeleteDirectory { choice, .. } => {
                assert_eq!(*choice, ConfirmChoice::Delete)
            }
            other => panic!("unexpected modal: {other:?}"),
        }
        app.move_cursor_left();
        match &app.modal {
            Modal::ConfirmDeleteDirectory { choice, .. } => {
                assert_eq!(*choice, ConfirmChoice::Cancel)
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn test_cursor_editing_respects_char_boundaries() {
        let mut app = app_with(&[]);
        app.open_add_form();
        type_str(&mut app, "héllo");
        app.move_cursor_left();
        app.move_cursor_left();
        app.delete_char(); // removes the 'l' before the cursor
        match &app.modal {
            Modal::AddDirectory { title, .. } => assert_eq!(title, "hélo"),
            other => panic!("unexpected modal: {other:?}"),
        }
    }
}
