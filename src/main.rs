// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Album Collector.
//!
//! A terminal application for searching the Spotify catalog for albums and
//! keeping a rated, sorted library of favourites on local disk.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering, and
//!   is the only owner of the library.
//! * A **Background Worker** performs catalog searches and artwork downloads
//!   via asynchronous task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels. The library is written to disk once more after the terminal has
//! been restored, whatever way the event loop ended.

mod catalog;
mod components;
mod config;
mod events;
mod model;
mod render;
mod store;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};

use crate::{
    components::{AlbumDetails, LibraryView, SearchView, SettingsView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{
        Library,
        requests::PendingRequests,
        search::{ArtworkTarget, Search},
    },
    store::LibraryStore,
    tasks::AppTask,
    theme::Theme,
};

const LOG_FILE: &str = "album-collector.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainView {
    Search,
    Library,
    Settings,
}

impl MainView {
    const ALL: [MainView; 3] = [MainView::Search, MainView::Library, MainView::Settings];

    fn title(self) -> &'static str {
        match self {
            MainView::Search => "Search",
            MainView::Library => "Library",
            MainView::Settings => "Settings",
        }
    }

    fn next(self) -> Self {
        match self {
            MainView::Search => MainView::Library,
            MainView::Library => MainView::Settings,
            MainView::Settings => MainView::Search,
        }
    }
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub store: LibraryStore,
    pub library: Library,

    pub search: Search,
    pub search_requests: PendingRequests<u32>,
    pub artwork_requests: PendingRequests<ArtworkTarget>,

    pub search_view: SearchView,
    pub library_view: LibraryView,
    pub settings_view: SettingsView,
    pub details: Option<AlbumDetails>,

    pub status: String,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, store: LibraryStore, library: Library, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let theme = Theme::named(&config.theme).unwrap_or_default();

        Self {
            config,
            theme,
            main_view: MainView::Search,
            event_tx,
            event_rx,
            task_tx,
            store,
            library,
            search: Search::new(),
            search_requests: PendingRequests::new(),
            artwork_requests: PendingRequests::new(),
            search_view: SearchView::new(),
            library_view: LibraryView::new(),
            settings_view: SettingsView::new(theme.index()),
            details: None,
            status: String::new(),
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, loads the library,
/// manages the terminal lifecycle, and saves the library on the way out.
fn main() -> Result<()> {
    let config = config::load_config();

    let mut store = LibraryStore::default_location();
    if let Some(dir) = store.path().parent() {
        util::log::configure_logging(&dir.join(LOG_FILE))?;
    }

    info!("starting");

    // A library that fails to load is left on disk and the session starts
    // empty, the file is backed up before anything is written over it
    let (library, load_status) = match store.load(config.sort_order) {
        Ok(library) => (library, None),
        Err(e) => {
            error!(path = %store.path().display(), "failed to load library: {e}");
            (Library::new(config.sort_order), Some(format!("Could not load library: {e}")))
        }
    };

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, store, library, task_tx);
    if let Some(status) = load_status {
        app.status = status;
    }

    tasks::spawn_task_worker(app.config.credentials(), task_rx, app.event_tx.clone());

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    let saved = app.store.save_on_exit(&app.library);
    if let Err(e) = &saved {
        error!("failed to save library on exit: {e}");
    }

    info!("exiting");

    res.context("Application error occurred")?;
    saved.context("Failed to save library")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the active theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the terminal's own colour
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// * An input thread polls for system keyboard events.
/// * A tick thread triggers periodic UI refreshes.
///
/// After spawning the threads, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
