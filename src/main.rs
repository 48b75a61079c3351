//! Noticeboard TUI - directories of short messages
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing UI events
//! - Board - coordinator owning the directory and message collections

mod app;
mod constants;
mod messages;
mod models;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};

use app::{AppState, Modal};
use messages::ui_events::{key_to_ui_event, FormField, ModalKind, Screen};
use messages::RenderState;
use ui::{directory_label, render_dialog_buttons, render_input};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", constants::LOG_FILE);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::default();
    run_ui_loop(&mut terminal, &mut app)?;

    Ok(())
}

/// Run the synchronous UI loop: draw, poll, translate, dispatch
fn run_ui_loop(terminal: &mut Terminal<impl Backend>, app: &mut AppState) -> anyhow::Result<()> {
    loop {
        let state = app.to_render_state();
        terminal.draw(|f| draw_ui(f, &state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, state.screen, state.modal.kind(), state.show_help)
                {
                    if app.handle_ui_event(event) {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, main_chunks[0]);

    match state.screen {
        Screen::DirectoryList => draw_directory_screen(f, state, main_chunks[1]),
        Screen::MessageList => draw_message_screen(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    // Popups
    match &state.modal {
        Modal::None => {}
        Modal::AddDirectory {
            title,
            initial_message,
            field,
        } => draw_add_directory_popup(f, state, area, title, initial_message, *field),
        Modal::RenameDirectory { input, .. } => {
            draw_form_popup(f, state, area, " Edit Directory ", " New Name ", input)
        }
        Modal::AddMessage { input } => {
            draw_form_popup(f, state, area, " New Message ", " Message ", input)
        }
        Modal::EditMessage { input, .. } => {
            draw_form_popup(f, state, area, " Edit Message ", " Message ", input)
        }
        Modal::ConfirmDeleteDirectory { title, choice } => {
            let prompt = format!("Delete \"{}\" and all its messages?", title);
            draw_confirm_popup(f, area, " Delete Directory ", &prompt, *choice);
        }
        Modal::ConfirmDeleteMessage { choice, .. } => {
            draw_confirm_popup(
                f,
                area,
                " Delete Message ",
                "Are you sure you want to delete this message?",
                *choice,
            );
        }
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let location = match (&state.screen, &state.open_directory) {
        (Screen::MessageList, Some(title)) => format!(" > {}", title),
        _ => String::new(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", constants::APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(location, Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_directory_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Directories ");

    if state.directories.is_empty() {
        let placeholder = Paragraph::new("No directories yet. Press 'a' to create one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .directories
        .iter()
        .map(|row| ListItem::new(directory_label(&row.title, row.message_count)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_directory));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_message_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = state.open_directory.as_deref().unwrap_or("Messages");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));

    if state.messages.is_empty() {
        let placeholder = Paragraph::new("No messages yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .messages
        .iter()
        .map(|msg| ListItem::new(format!("• {}", msg)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_message));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = match state.modal.kind() {
        ModalKind::Form => " Enter:save | Tab:next field | Esc:cancel ",
        ModalKind::Confirm => " ←/→:choose | Enter:confirm | Esc:cancel ",
        ModalKind::None => match state.screen {
            Screen::DirectoryList => {
                " ↑/↓:select | Enter:open | a:add | e:rename | d:delete | ?:help | q:quit "
            }
            Screen::MessageList => {
                " ↑/↓:select | a:add | e:edit | d:delete | Esc:back | ?:help | q:quit "
            }
        },
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

/// Two-field creation form: directory title plus optional first message
fn draw_add_directory_popup(
    f: &mut Frame,
    state: &RenderState,
    area: Rect,
    title: &str,
    initial_message: &str,
    field: FormField,
) {
    let popup_area = centered_rect(60, 40, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Directory ")
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Directory name
            Constraint::Length(3), // Initial message
            Constraint::Min(0),
        ])
        .split(inner);

    let title_focused = field == FormField::Title;
    f.render_widget(
        render_input(title, " Directory Name ", title_focused),
        chunks[0],
    );
    f.render_widget(
        render_input(initial_message, " Initial Message (optional) ", !title_focused),
        chunks[1],
    );

    let input_area = if title_focused { chunks[0] } else { chunks[1] };
    set_input_cursor(f, input_area, state.cursor_position);
}

/// Single-field form popup used for rename and message add/edit
fn draw_form_popup(
    f: &mut Frame,
    state: &RenderState,
    area: Rect,
    popup_title: &str,
    input_title: &str,
    input: &str,
) {
    let popup_area = centered_rect(60, 30, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(popup_title)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    f.render_widget(render_input(input, input_title, true), chunks[0]);
    set_input_cursor(f, chunks[0], state.cursor_position);
}

fn draw_confirm_popup(
    f: &mut Frame,
    area: Rect,
    title: &str,
    prompt: &str,
    choice: app::ConfirmChoice,
) {
    let popup_area = centered_rect(50, 25, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Prompt
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Padding
        ])
        .split(inner);

    let prompt = Paragraph::new(prompt)
        .wrap(Wrap { trim: false })
        .centered();
    f.render_widget(prompt, chunks[0]);
    f.render_widget(Paragraph::new(render_dialog_buttons(choice)), chunks[1]);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 NOTICEBOARD - Keyboard Shortcuts

 DIRECTORIES
   ↑ / ↓              Select directory
   Enter / →          Open directory
   a                  Add directory (title + first message)
   e                  Rename directory
   d                  Delete directory (confirm first)

 MESSAGES
   ↑ / ↓              Select message
   a                  Add message
   e                  Edit message
   d                  Delete message (confirm first)
   Esc / ←            Back to directories

 FORMS & DIALOGS
   Enter              Save / confirm
   Tab                Next field (new directory form)
   Esc                Cancel

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Place the terminal cursor inside a bordered input field
fn set_input_cursor(f: &mut Frame, input_area: Rect, cursor_position: usize) {
    let max_x = input_area.x + input_area.width.saturating_sub(2);
    let cursor_x = (input_area.x + cursor_position as u16 + 1).min(max_x);
    f.set_cursor_position(Position::new(cursor_x, input_area.y + 1));
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
