//! Terminal entry point.
//!
//! # Responsibility
//! - Resolve configuration from the environment.
//! - Bootstrap logging and storage, then hand control to the event loop.
//! - Restore the terminal on the way out, including on errors.

mod app;
mod ui;

use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::path::PathBuf;
use ticklist_core::{
    core_version, default_log_level, init_logging, open_store, KeyValueStore,
    SqliteKeyValueStore, TodoManager,
};

const DB_PATH_ENV: &str = "TICKLIST_DB";
const DB_PATH_DEFAULT: &str = "ticklist.sqlite3";
const LOG_DIR_ENV: &str = "TICKLIST_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TICKLIST_LOG_LEVEL";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level =
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = std::env::var(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("ticklist").join("logs"));

    // The UI stays usable without logs; a setup problem is only reported.
    if let Err(err) = init_logging(&log_level, &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }
    info!(
        "event=app_start module=tui status=ok version={}",
        core_version()
    );

    let db_path = std::env::var(DB_PATH_ENV).unwrap_or_else(|_| DB_PATH_DEFAULT.to_string());
    let conn = open_store(&db_path)?;
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let mut app = App::new(TodoManager::load(store));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!("event=app_exit module=tui status=error error={err}");
        return Err(err.into());
    }
    info!("event=app_exit module=tui status=ok");
    Ok(())
}

fn run_app<B: Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            app.on_key(key);
            if app.should_quit {
                return Ok(());
            }
        }
    }
}
