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

//! Library view.
//!
//! This module coordinates the album table for the saved library. The table
//! shows the library in its current sort order; the view never reorders
//! anything itself, it only asks for changes through [`LibraryAction`]s.

mod event;
mod render;

use crate::components::AlbumTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LibraryAction {
    CycleSortOrder,
    Rate { id: String, rating: i32 },
    Remove(usize),
    ShowDetails(usize),
}

pub(crate) struct LibraryView {
    pub(crate) album_table: AlbumTable,
}

impl LibraryView {
    pub(crate) fn new() -> Self {
        Self {
            album_table: AlbumTable::new(),
        }
    }

    /// Keeps the selection on the album with the given position after the
    /// library has been reordered.
    pub(crate) fn follow(&mut self, position: Option<usize>, len: usize) {
        match position {
            Some(position) => self.album_table.select(Some(position)),
            None => self.album_table.clamp(len),
        }
    }
}
