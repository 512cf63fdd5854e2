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

//! Catalog search view.
//!
//! This module coordinates the query input and the results table of the
//! search page. Typing happens in the input; once a query is submitted the
//! keyboard moves to the results, from where albums can be added to the
//! library, inspected, or more results requested.

mod event;
mod render;

use tui_input::Input;

use crate::components::AlbumTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchAction {
    Submit(String),
    LoadMore,
    AddToLibrary(usize),
    ShowDetails(usize),
}

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) album_table: AlbumTable,
    editing: bool,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            album_table: AlbumTable::new(),
            editing: true,
        }
    }

    /// Whether key presses currently go to the query input.
    pub(crate) fn is_editing(&self) -> bool {
        self.editing
    }

    /// Clears the results selection ahead of a new set of results.
    pub(crate) fn reset_results(&mut self) {
        self.album_table.reset();
    }
}
