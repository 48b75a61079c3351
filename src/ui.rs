use ratatui::{prelude::*, widgets::*};

use crate::app::ConfirmChoice;

/// Renders a text input field, highlighted when focused
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders the Cancel/Delete button row of a confirmation dialog
pub fn render_dialog_buttons(choice: ConfirmChoice) -> Line<'static> {
    let cancel_style = if choice == ConfirmChoice::Cancel {
        Style::default().fg(Color::Black).bg(Color::Gray).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let delete_style = if choice == ConfirmChoice::Delete {
        Style::default().fg(Color::White).bg(Color::Red).bold()
    } else {
        Style::default().fg(Color::Red)
    };

    Line::from(vec![
        Span::styled("  Cancel  ", cancel_style),
        Span::raw("   "),
        Span::styled("  Delete  ", delete_style),
    ])
    .centered()
}

/// Row label for the directory list
pub fn directory_label(title: &str, message_count: usize) -> String {
    let noun = if message_count == 1 { "message" } else { "messages" };
    format!("{}  ({} {})", title, message_count, noun)
}
