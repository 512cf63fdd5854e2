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

//! Event routing for the library view.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{LibraryAction, LibraryView},
    model::{Library, UNRATED},
};

impl LibraryView {
    pub(crate) fn process_event(&mut self, event: &Event, library: &Library) -> Option<LibraryAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let len = library.len();
        if self.album_table.process_navigation(event, len) {
            return None;
        }

        let selected = self.album_table.selected(len);

        match key_event.code {
            KeyCode::Char('s') => Some(LibraryAction::CycleSortOrder),

            KeyCode::Char('+') | KeyCode::Char('=') => self.rate_selected(library, 1),
            KeyCode::Char('-') => self.rate_selected(library, -1),
            KeyCode::Char('x') => {
                let entry = library.get(selected?)?;
                Some(LibraryAction::Rate {
                    id: entry.album.id.clone(),
                    rating: UNRATED,
                })
            }

            KeyCode::Char('d') | KeyCode::Delete => selected.map(LibraryAction::Remove),

            KeyCode::Enter => selected.map(LibraryAction::ShowDetails),

            _ => None,
        }
    }

    fn rate_selected(&self, library: &Library, delta: i32) -> Option<LibraryAction> {
        let position = self.album_table.selected(library.len())?;
        let entry = library.get(position)?;

        Some(LibraryAction::Rate {
            id: entry.album.id.clone(),
            rating: entry.rating + delta,
        })
    }
}
