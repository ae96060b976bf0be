use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Celebrity;
use crate::ops::editor::{Field, RowEditor};
use crate::ops::selection::Selection;
use crate::tui::app::App;

use super::{push_highlighted_spans, spans_width};

/// Width of the label column in detail and form lines
const LABEL_WIDTH: usize = 15;

/// Render the filtered list. The expanded record shows its details (or the
/// edit form) beneath its row.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let store = app.session.store();

    if store.filtered_len() == 0 {
        let msg = if store.is_empty() {
            " No celebrities left"
        } else {
            " No matches"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let search_re = app.search_re();
    let selection = app.session.selection();

    // Each display line remembers which row it belongs to, for scrolling
    let mut display_lines: Vec<(usize, Line)> = Vec::new();
    let mut cursor_span = (0, 0);

    for (i, celeb) in store.filtered().enumerate() {
        let is_cursor = i == app.cursor;
        let is_expanded = selection.expanded() == Some(celeb.id);
        let row_bg = if is_cursor {
            app.theme.selection_bg
        } else {
            bg
        };

        let start = display_lines.len();

        let mut spans: Vec<Span> = Vec::new();
        let marker = if is_expanded { " - " } else { " + " };
        spans.push(Span::styled(
            marker,
            Style::default().fg(app.theme.highlight).bg(row_bg),
        ));
        let mut name_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
        if is_cursor || is_expanded {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        let match_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);
        push_highlighted_spans(
            &mut spans,
            &celeb.fullname,
            name_style,
            match_style,
            search_re.as_ref(),
        );

        // Pad cursor line
        if is_cursor {
            let content_width = spans_width(&spans);
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }
        display_lines.push((i, Line::from(spans)));

        if is_expanded {
            let body = match (selection, app.session.editor()) {
                (Selection::Editing(_), Some(editor)) => edit_lines(app, editor),
                _ => detail_lines(app, celeb),
            };
            display_lines.extend(body.into_iter().map(|line| (i, line)));
        }

        if is_cursor {
            cursor_span = (start, display_lines.len());
        }
    }

    // Keep the cursor row and its expanded body on screen
    let visible_height = area.height as usize;
    let (top, bottom) = cursor_span;
    if bottom > app.scroll + visible_height {
        app.scroll = bottom.saturating_sub(visible_height);
    }
    if top < app.scroll {
        app.scroll = top;
    }

    let lines: Vec<Line> = display_lines
        .into_iter()
        .skip(app.scroll)
        .take(visible_height)
        .map(|(_, line)| line)
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Read-only details of an expanded record
fn detail_lines<'a>(app: &App, celeb: &Celebrity) -> Vec<Line<'a>> {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text).bg(bg);

    let mut lines: Vec<Line> = [
        ("Email", celeb.email.clone()),
        ("Country", celeb.country.clone()),
        ("Description", celeb.description.clone()),
        ("Born", format!("{} (age {})", celeb.dob, celeb.age)),
        ("Gender", celeb.gender.label().to_string()),
        ("Picture", celeb.picture.clone()),
    ]
    .into_iter()
    .map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("     {:<width$}", label, width = LABEL_WIDTH), label_style),
            Span::styled(value, value_style),
        ])
    })
    .collect();

    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut hints = vec![Span::styled("     ", Style::default().bg(bg))];
    if app.session.can_edit(celeb.id) {
        hints.push(Span::styled("e", key_style));
        hints.push(Span::styled(" edit  ", label_style));
    }
    hints.push(Span::styled("d", key_style));
    hints.push(Span::styled(" delete", label_style));
    lines.push(Line::from(hints));
    lines.push(Line::from(""));
    lines
}

/// Edit form for the working copy, with the focused field marked
fn edit_lines<'a>(app: &App, editor: &RowEditor) -> Vec<Line<'a>> {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let focus_label = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(app.theme.text).bg(bg);
    let focus_value = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg);

    let mut lines = Vec::new();
    for field in Field::ALL {
        let focused = field == app.edit_field;
        let marker = if focused { "   > " } else { "     " };
        let mut value = editor.field_value(field);
        if focused {
            if field == Field::Gender {
                value = format!("\u{2039} {} \u{203A}", value); // ‹ value ›
            } else {
                value.push('\u{258C}'); // ▌ cursor
            }
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}{:<width$}", marker, field.label(), width = LABEL_WIDTH),
                if focused { focus_label } else { label_style },
            ),
            Span::styled(value, if focused { focus_value } else { value_style }),
        ]));
    }

    let mut hints = vec![Span::styled(
        "     Enter save  Esc cancel  Tab next field",
        label_style,
    )];
    if editor.is_dirty() {
        hints.push(Span::styled(
            "  (modified)",
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
    }
    lines.push(Line::from(hints));
    lines.push(Line::from(""));
    lines
}
