use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Gender;
use crate::ops::editor::Field;
use crate::ops::session::{SaveOutcome, SessionError};
use crate::tui::app::{App, Mode};

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            if app.session.cancel().is_ok() {
                app.set_status("edit discarded");
            }
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Enter) | (KeyModifiers::CONTROL, KeyCode::Char('s')) => save(app),

        // Field focus
        (_, KeyCode::Tab) | (_, KeyCode::Down) => {
            app.edit_field = app.edit_field.next();
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            app.edit_field = app.edit_field.prev();
        }

        // Gender is a fixed set of options: cycle instead of typing
        (_, KeyCode::Left) if app.edit_field == Field::Gender => cycle_gender(app, Gender::prev),
        (_, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char(' '))
            if app.edit_field == Field::Gender =>
        {
            cycle_gender(app, Gender::next)
        }

        (_, KeyCode::Backspace) => {
            let mut value = current_value(app);
            value.pop();
            stage(app, &value);
        }

        (KeyModifiers::CONTROL, KeyCode::Char('u')) => stage(app, ""),

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if app.edit_field == Field::Gender {
                return;
            }
            let mut value = current_value(app);
            value.push(c);
            stage(app, &value);
        }

        _ => {}
    }
}

fn current_value(app: &App) -> String {
    app.session
        .editor()
        .map(|ed| ed.field_value(app.edit_field))
        .unwrap_or_default()
}

/// Offer a new value for the focused field; rejected input is dropped
fn stage(app: &mut App, value: &str) {
    let field = app.edit_field;
    // A cleared age reads as 0; keep typing from there
    let value = if field == Field::Age && value.is_empty() {
        "0"
    } else {
        value
    };
    apply(app, field, value);
}

fn cycle_gender(app: &mut App, step: fn(Gender) -> Gender) {
    match app.session.editor().map(|ed| ed.working().gender) {
        Some(current) => apply(app, Field::Gender, step(current).label()),
        None => leave_with_error(app, SessionError::NotEditing),
    }
}

fn apply(app: &mut App, field: Field, value: &str) {
    if let Err(e) = app.session.set_field(field, value) {
        leave_with_error(app, e);
    }
}

fn leave_with_error(app: &mut App, e: SessionError) {
    app.set_error(e.to_string());
    app.mode = Mode::Navigate;
}

fn save(app: &mut App) {
    let name = app
        .session
        .editor()
        .map(|ed| ed.working().fullname.clone())
        .unwrap_or_default();
    match app.session.save() {
        Ok(SaveOutcome::Saved) => {
            app.mode = Mode::Navigate;
            let id = app.session.selection().expanded();
            app.follow(id);
            app.set_status(format!("saved \"{}\"", name.trim()));
        }
        Ok(SaveOutcome::Unchanged) => app.set_status("nothing to save"),
        Err(SessionError::Validation(e)) => app.set_error(e.to_string()),
        Err(e) => leave_with_error(app, e),
    }
}
