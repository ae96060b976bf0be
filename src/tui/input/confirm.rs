use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::RecordId;
use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('y' | 'Y')) => {
            let state = app.confirm_state.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state {
                match state.action {
                    ConfirmAction::DeleteCelebrity { id } => confirm_delete(app, id),
                }
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('n' | 'N')) | (_, KeyCode::Esc) => {
            app.confirm_state = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn confirm_delete(app: &mut App, id: RecordId) {
    let name = app
        .session
        .store()
        .get(id)
        .map(|c| c.fullname.clone())
        .unwrap_or_default();
    match app.session.delete(id) {
        Ok(true) => {
            app.clamp_cursor();
            app.set_status(format!("deleted \"{}\"", name));
        }
        Ok(false) => {}
        Err(e) => app.set_error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::selection::Selection;
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::{app_with_records, press};
    use crossterm::event::KeyCode;

    #[test]
    fn yes_deletes() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.session.store().get(1).is_none());
        assert_eq!(app.session.selection(), Selection::Idle);
        assert_eq!(app.status_message.as_deref(), Some("deleted \"Jane Doe\""));
        assert_eq!(app.cursor_id(), Some(2));
    }

    #[test]
    fn no_leaves_everything_alone() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.confirm_state.is_none());
        assert_eq!(app.session.store().len(), 2);
        assert_eq!(app.session.selection(), Selection::Expanded(1));
    }

    #[test]
    fn other_keys_wait_for_an_answer() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.mode, Mode::Confirm);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.session.store().len(), 2);
    }

    #[test]
    fn deleting_the_last_row_moves_cursor_up() {
        let mut app = app_with_records();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.cursor_id(), Some(1));
    }
}
