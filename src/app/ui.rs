use std::path::Path;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use crate::app::{
    Command, NoteBuffer, TickerDialog,
    dialog::{CONFIRM_LABEL, DIALOG_TITLE, TICKER_LABEL},
};

const HELP: &str = "Ctrl+K Insert stock info | Ctrl+P Commands | Ctrl+S Save | Ctrl+Q Quit";

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    note: &NoteBuffer,
    note_path: &Path,
    dialog: Option<&TickerDialog>,
    notice: Option<&str>,
    popup_message: Option<&str>,
    show_palette: bool,
    palette_state: &mut ListState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let modified = if note.is_dirty() { " [modified]" } else { "" };
    let title = Paragraph::new(format!("{}{}", note_path.display(), modified))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().title("Stock Info").borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = chunks[1];
    let (row, col) = note.cursor_position();
    let visible_rows = body.height.saturating_sub(2) as usize;
    let scroll = row.saturating_sub(visible_rows.saturating_sub(1));

    let text = Paragraph::new(note_lines(note))
        .block(Block::default().title("Note").borders(Borders::ALL))
        .scroll((scroll as u16, 0));
    frame.render_widget(text, body);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);

    let overlay = dialog.is_some() || show_palette || popup_message.is_some();
    if !overlay {
        frame.set_cursor_position((
            body.x + 1 + col as u16,
            body.y + 1 + (row - scroll) as u16,
        ));
    }

    if show_palette {
        render_palette(frame, palette_state);
    }

    if let Some(dialog) = dialog {
        render_dialog(frame, dialog);
    }

    if let Some(message) = popup_message {
        render_message(frame, "Please wait", message, Color::Yellow);
    }

    if let Some(message) = notice {
        render_message(frame, "Notice", message, Color::Red);
    }
}

fn note_lines(note: &NoteBuffer) -> Vec<Line<'_>> {
    let selection = note.selection_range();
    let selected = Style::default().add_modifier(Modifier::REVERSED);
    let mut lines = Vec::new();
    let mut start = 0;

    for raw in note.text().split('\n') {
        let end = start + raw.len();
        let line = match &selection {
            Some(sel) if sel.start < end && sel.end > start => {
                let from = sel.start.max(start) - start;
                let to = sel.end.min(end) - start;
                Line::from(vec![
                    Span::raw(&raw[..from]),
                    Span::styled(&raw[from..to], selected),
                    Span::raw(&raw[to..]),
                ])
            }
            _ => Line::raw(raw),
        };
        lines.push(line);
        start = end + 1;
    }

    lines
}

fn render_palette(frame: &mut Frame, palette_state: &mut ListState) {
    let area = centered_rect(50, 30, frame.area());
    let items: Vec<ListItem> = Command::iter()
        .map(|command| ListItem::new(command.to_string()))
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Commands").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, palette_state);
}

fn render_dialog(frame: &mut Frame, dialog: &TickerDialog) {
    let area = centered_rect(50, 40, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(DIALOG_TITLE)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let input = Paragraph::new(dialog.ticker())
        .style(Style::default().fg(Color::White))
        .block(Block::default().title(TICKER_LABEL).borders(Borders::ALL));
    frame.render_widget(input, rows[0]);

    let hint = Paragraph::new(format!("Enter: {} | Esc: Cancel", CONFIRM_LABEL))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(hint, rows[1]);

    frame.set_cursor_position((rows[0].x + 1 + dialog.cursor() as u16, rows[0].y + 1));
}

fn render_message(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = centered_rect(50, 20, frame.area());
    let popup = Paragraph::new(message)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
