use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::spans_width;

/// Title row with match count, then the search box and a separator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let store = app.session.store();

    // Title + count
    let mut title = vec![Span::styled(
        " Celebrity Manager",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let count = if store.query().is_empty() {
        format!("{} ", store.len())
    } else {
        format!("{}/{} ", store.filtered_len(), store.len())
    };
    let used = spans_width(&title) + count.len();
    if used < width {
        title.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    title.push(Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)));

    // Search box
    let searching = app.mode == Mode::Search;
    let label_color = if searching {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let mut search = vec![
        Span::styled(" Search: ", Style::default().fg(label_color).bg(bg)),
        Span::styled(
            store.query().to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ];
    if searching {
        search.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        )); // ▌ cursor
    } else if store.query().is_empty() {
        search.push(Span::styled(
            "/ to search",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![Line::from(title), Line::from(search), separator])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
