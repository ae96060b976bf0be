use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::spans_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(msg) = &app.status_message {
        let color = if app.status_is_error {
            app.theme.red
        } else {
            app.theme.green
        };
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(color).bg(bg),
        ));
    } else if let (Mode::Confirm, Some(state)) = (app.mode, &app.confirm_state) {
        spans.push(Span::styled(
            format!(" {}", state.message),
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
    }

    let hint = match app.mode {
        Mode::Navigate => "Enter open  e edit  d delete  / search  ? help  q quit",
        Mode::Search => "Enter keep  Esc clear",
        Mode::Edit => "Tab next  Enter save  Esc cancel",
        Mode::Confirm => "y yes  n no",
    };
    let content_width = spans_width(&spans);
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
