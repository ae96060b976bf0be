use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regex::Regex;

use crate::cli::handlers::Context;
use crate::model::{Celebrity, RecordId};
use crate::ops::editor::Field;
use crate::ops::session::Session;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search box; the list filters live
    Search,
    /// Editing the expanded record's working copy
    Edit,
    /// Waiting for y/n on a pending action
    Confirm,
}

/// An action waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteCelebrity { id: RecordId },
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub message: String,
    pub action: ConfirmAction,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the filtered view
    pub cursor: usize,
    /// First visible line of the list
    pub scroll: usize,
    /// Focused field of the edit form
    pub edit_field: Field,
    pub confirm_state: Option<ConfirmState>,
    /// One-shot message for the status row (cleared on next key)
    pub status_message: Option<String>,
    pub status_is_error: bool,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new(session: Session, theme: Theme) -> Self {
        App {
            session,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll: 0,
            edit_field: Field::First,
            confirm_state: None,
            status_message: None,
            status_is_error: false,
            show_help: false,
        }
    }

    /// The record under the cursor
    pub fn cursor_record(&self) -> Option<&Celebrity> {
        self.session.store().filtered_nth(self.cursor)
    }

    pub fn cursor_id(&self) -> Option<RecordId> {
        self.cursor_record().map(|c| c.id)
    }

    /// Keep the cursor inside the filtered view
    pub fn clamp_cursor(&mut self) {
        let count = self.session.store().filtered_len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Put the cursor on `id` if it is visible, else clamp
    pub fn follow(&mut self, id: Option<RecordId>) {
        match id.and_then(|id| self.session.store().filtered_position(id)) {
            Some(pos) => self.cursor = pos,
            None => self.clamp_cursor(),
        }
    }

    /// Replace the query, keeping the cursor on the same record when possible
    pub fn set_query(&mut self, text: &str) {
        let current = self.cursor_id();
        self.session.set_query(text);
        self.follow(current);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_is_error = true;
    }

    /// The pattern the list is filtered by, for highlighting matches
    pub fn search_re(&self) -> Option<Regex> {
        self.session.store().matcher().cloned()
    }
}

/// Run the TUI application
pub fn run(ctx: Context) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::new(ctx.records, ctx.config.rules, ctx.today);
    let theme = Theme::from_config(&ctx.config.ui);
    let mut app = App::new(session, theme);
    tracing::info!(records = app.session.store().len(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(records = app.session.store().len(), "tui closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
