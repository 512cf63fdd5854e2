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

//! Input handling for the album table.
//!
//! This module maps raw terminal keyboard events to table navigation.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::AlbumTable;

impl AlbumTable {
    /// Moves the selection in a table of `len` rows.
    ///
    /// Returns `true` if the event was a navigation key.
    pub(crate) fn process_navigation(&mut self, event: &Event, len: usize) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(len),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(len),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(len),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(len),

            (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
                self.goto_page_forward(len)
            }
            (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
                self.goto_page_back(len)
            }

            _ => return false,
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn vim_and_arrow_keys_navigate() {
        let mut table = AlbumTable::new();

        assert!(table.process_navigation(&key(KeyCode::Char('j')), 5));
        assert!(table.process_navigation(&key(KeyCode::Down), 5));
        assert_eq!(table.selected(5), Some(1));

        assert!(table.process_navigation(&key(KeyCode::Char('G')), 5));
        assert_eq!(table.selected(5), Some(4));

        assert!(table.process_navigation(&key(KeyCode::Home), 5));
        assert_eq!(table.selected(5), Some(0));
    }

    #[test]
    fn other_keys_are_not_consumed() {
        let mut table = AlbumTable::new();

        assert!(!table.process_navigation(&key(KeyCode::Char('a')), 5));
        assert!(!table.process_navigation(&key(KeyCode::Enter), 5));
        assert_eq!(table.selected(5), None);
    }
}
