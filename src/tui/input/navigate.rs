use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::editor::Field;
use crate::ops::session::SessionError;
use crate::tui::app::{App, ConfirmAction, ConfirmState, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }

        // Cursor movement
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            let count = app.session.store().filtered_len();
            if app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (_, KeyCode::End) | (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.session.store().filtered_len().saturating_sub(1);
        }

        // Expand / collapse
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            if let Some(id) = app.cursor_id() {
                app.session.toggle(id);
            }
        }

        (KeyModifiers::NONE, KeyCode::Char('e')) => begin_edit(app),

        (KeyModifiers::NONE, KeyCode::Char('d')) => request_delete(app),

        (KeyModifiers::NONE, KeyCode::Char('/')) => {
            app.mode = Mode::Search;
        }

        // Clear an active filter
        (_, KeyCode::Esc) => {
            if !app.session.store().query().is_empty() {
                app.set_query("");
            }
        }

        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        _ => {}
    }
}

/// Enter edit mode on the expanded record
fn begin_edit(app: &mut App) {
    let Some(id) = app.session.selection().expanded() else {
        app.set_error("expand a record first (Enter)");
        return;
    };
    match app.session.begin_edit(id) {
        Ok(()) => {
            app.mode = Mode::Edit;
            app.edit_field = Field::First;
            app.follow(Some(id));
        }
        Err(SessionError::NotEligible { min_age, .. }) => {
            app.set_error(format!("only records aged {}+ can be edited", min_age));
        }
        Err(e) => app.set_error(e.to_string()),
    }
}

/// Ask before deleting the record under the cursor
fn request_delete(app: &mut App) {
    let Some(record) = app.cursor_record() else {
        return;
    };
    let message = format!("Delete \"{}\"? (y/n)", record.fullname);
    let id = record.id;
    app.confirm_state = Some(ConfirmState {
        message,
        action: ConfirmAction::DeleteCelebrity { id },
    });
    app.mode = Mode::Confirm;
}

#[cfg(test)]
mod tests {
    use crate::ops::selection::Selection;
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::{app_with_records, press};
    use crossterm::event::KeyCode;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn enter_toggles_record_under_cursor() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.selection(), Selection::Expanded(1));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.selection(), Selection::Expanded(2));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.selection(), Selection::Idle);
    }

    #[test]
    fn edit_needs_an_expanded_record() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.status_is_error);
    }

    #[test]
    fn edit_refused_when_expanded_record_is_filtered_out() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Enter);
        app.set_query("jon");
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.session.selection(), Selection::Expanded(1));
        assert!(app.status_is_error);

        // Typing and Enter afterwards must not reach the hidden record
        press(&mut app, KeyCode::Char('X'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.store().get(1).map(|c| c.first.as_str()), Some("Jane"));
    }

    #[test]
    fn minors_cannot_be_edited() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(
            app.status_message.as_deref(),
            Some("only records aged 18+ can be edited")
        );
        assert_eq!(app.session.selection(), Selection::Expanded(2));
    }

    #[test]
    fn edit_moves_cursor_to_expanded_record() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.session.selection(), Selection::Editing(1));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn delete_asks_first() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(
            app.confirm_state.as_ref().map(|c| c.message.as_str()),
            Some("Delete \"Jane Doe\"? (y/n)")
        );
        assert_eq!(app.session.store().len(), 2);
    }

    #[test]
    fn slash_opens_search_and_esc_clears_query() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Search);
        app.mode = Mode::Navigate;
        app.set_query("jon");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.store().query(), "");
    }

    #[test]
    fn q_quits() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
