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

//! Event routing for the settings view.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{SettingsAction, SettingsView},
    theme::THEMES,
};

impl SettingsView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SettingsAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let len = THEMES.len();
        let current = self.list_state.selected().unwrap_or_default().min(len - 1);

        let next = match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => (current + 1) % len,
            KeyCode::Char('k') | KeyCode::Up => (current + len - 1) % len,
            KeyCode::Char('g') | KeyCode::Home => 0,
            KeyCode::Char('G') | KeyCode::End => len - 1,
            KeyCode::Enter => current,
            _ => return None,
        };

        self.list_state.select(Some(next));
        Some(SettingsAction::ApplyTheme(next))
    }
}
