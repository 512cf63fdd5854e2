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

//! Settings view.
//!
//! Lists the available colour themes. Moving through the list previews each
//! theme straight away, the choice is saved with the configuration.

mod event;
mod render;

use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingsAction {
    ApplyTheme(usize),
}

pub(crate) struct SettingsView {
    pub(crate) list_state: ListState,
}

impl SettingsView {
    pub(crate) fn new(selected_theme: usize) -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(selected_theme)),
        }
    }
}
