use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Drop the filter
        (_, KeyCode::Esc) => {
            app.set_query("");
            app.mode = Mode::Navigate;
        }

        // Keep the filter
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            let mut query = app.session.store().query().to_string();
            query.pop();
            app.set_query(&query);
        }

        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.set_query("");
        }

        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut query = app.session.store().query().to_string();
            query.push(c);
            app.set_query(&query);
        }

        _ => {}
    }
}
