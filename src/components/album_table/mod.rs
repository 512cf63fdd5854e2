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

//! Interactive album table widget and state management.
//!
//! This module provides a reusable table component for displaying and
//! selecting albums. The table only keeps the selection; the rows are handed
//! in by the owning view each time it is drawn or receives an event, so the
//! selection is always checked against the live row count.

mod event;
mod render;

pub(crate) use render::AlbumRow;

use ratatui::widgets::TableState;

/// Rows moved by a page up or page down.
const PAGE_ROWS: usize = 10;

#[derive(Debug, Default)]
pub(crate) struct AlbumTable {
    pub(crate) table_state: TableState,
}

impl AlbumTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The selected row, if it is within a table of `len` rows.
    pub(crate) fn selected(&self, len: usize) -> Option<usize> {
        self.table_state.selected().filter(|index| *index < len)
    }

    /// Moves the selection back inside a table that now has `len` rows.
    pub(crate) fn clamp(&mut self, len: usize) {
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(index) if index >= len => self.table_state.select(Some(len - 1)),
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    pub(crate) fn select(&mut self, index: Option<usize>) {
        self.table_state.select(index);
    }

    pub(crate) fn reset(&mut self) {
        self.table_state = TableState::default();
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 || i >= len { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len == 0 { return; }
        self.table_state.select(Some(0));
    }

    fn goto_last(&mut self, len: usize) {
        if len == 0 { return; }
        self.table_state.select(Some(len - 1));
    }

    fn goto_page_forward(&mut self, len: usize) {
        if len == 0 { return; }
        let i = self.table_state.selected().map_or(0, |i| i + PAGE_ROWS);
        self.table_state.select(Some(i.min(len - 1)));
    }

    fn goto_page_back(&mut self, len: usize) {
        if len == 0 { return; }
        let i = self.table_state.selected().map_or(0, |i| i.saturating_sub(PAGE_ROWS));
        self.table_state.select(Some(i.min(len - 1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap() {
        let mut table = AlbumTable::new();

        table.goto_next(3);
        assert_eq!(table.selected(3), Some(0));

        table.goto_previous(3);
        assert_eq!(table.selected(3), Some(2));

        table.goto_next(3);
        assert_eq!(table.selected(3), Some(0));
    }

    #[test]
    fn navigation_ignores_empty_tables() {
        let mut table = AlbumTable::new();

        table.goto_next(0);
        table.goto_last(0);
        table.goto_page_forward(0);

        assert_eq!(table.selected(0), None);
    }

    #[test]
    fn paging_stops_at_the_ends() {
        let mut table = AlbumTable::new();

        table.goto_page_forward(25);
        assert_eq!(table.selected(25), Some(0));
        table.goto_page_forward(25);
        table.goto_page_forward(25);
        table.goto_page_forward(25);
        assert_eq!(table.selected(25), Some(24));

        table.goto_page_back(25);
        assert_eq!(table.selected(25), Some(14));
    }

    #[test]
    fn clamp_follows_shrinking_tables() {
        let mut table = AlbumTable::new();
        table.select(Some(4));

        assert_eq!(table.selected(3), None);
        table.clamp(3);
        assert_eq!(table.selected(3), Some(2));

        table.clamp(0);
        assert_eq!(table.selected(0), None);

        table.clamp(2);
        assert_eq!(table.selected(2), Some(0));
    }
}
