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

//! Interactive UI components.
//!
//! Each page of the application is a view that owns its transient widget
//! state (selection, scroll position, text input) but none of the data it
//! displays. Views turn key events into actions, which the event handlers
//! then apply to the application state.

mod album_table;
mod details;
mod library;
mod search;
mod settings;

pub(crate) use album_table::{AlbumRow, AlbumTable};
pub(crate) use details::AlbumDetails;
pub(crate) use library::{LibraryAction, LibraryView};
pub(crate) use search::{SearchAction, SearchView};
pub(crate) use settings::{SettingsAction, SettingsView};
