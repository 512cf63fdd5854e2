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

//! Keyboard routing.
//!
//! Keys go to the first of these that wants them: the details popup, the
//! search input while it has focus, the global keys, and finally the view on
//! screen.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App, MainView,
    events::{
        AppEvent,
        handlers::{handle_library_action, handle_search_action, handle_settings_action},
    },
};

/// Maps keyboard input to application actions.
///
/// # Errors
///
/// Returns an error if a request cannot be sent to the background worker or
/// the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some terminals also report releases
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.details.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.details = None;
        }
        return Ok(());
    }

    let typing = app.main_view == MainView::Search && app.search_view.is_editing();
    if !typing && process_global_key_event(app, key)? {
        return Ok(());
    }

    let event = Event::Key(key);

    match app.main_view {
        MainView::Search => {
            if let Some(action) = app.search_view.process_event(&event, &app.search) {
                handle_search_action(app, action)?;
            }
        }
        MainView::Library => {
            if let Some(action) = app.library_view.process_event(&event, &app.library) {
                handle_library_action(app, action);
            }
        }
        MainView::Settings => {
            if let Some(action) = app.settings_view.process_event(&event) {
                handle_settings_action(app, action);
            }
        }
    }

    Ok(())
}

/// Handles keys that mean the same on every page, returning `true` if the
/// key was one of them.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app.main_view = MainView::Search,
        KeyCode::Char('2') => app.main_view = MainView::Library,
        KeyCode::Char('3') => app.main_view = MainView::Settings,
        KeyCode::Tab => app.main_view = app.main_view.next(),

        _ => return Ok(false),
    }

    if app.main_view == MainView::Library {
        app.library_view.album_table.clamp(app.library.len());
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{
        config::AppConfig,
        model::{Library, SortOrder},
        store::LibraryStore,
    };

    fn app(dir: &tempfile::TempDir) -> App {
        let (task_tx, _task_rx) = mpsc::channel();
        App::new(
            AppConfig::default(),
            LibraryStore::new(dir.path().join("library.dat")),
            Library::new(SortOrder::Artist),
            task_tx,
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn digits_are_typed_into_the_search_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('q'));

        assert_eq!(app.main_view, MainView::Search);
        assert_eq!(app.search_view.input.value(), "2q");
        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn global_keys_switch_pages_outside_the_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.main_view, MainView::Library);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.main_view, MainView::Settings);

        press(&mut app, KeyCode::Char('q'));
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn release_events_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);

        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        process_key_event(&mut app, key).unwrap();

        assert_eq!(app.search_view.input.value(), "");
    }
}
