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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod sidebar;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Padding},
};

use crate::{
    App, MainView,
    render::{sidebar::draw_sidebar, status::draw_status},
};

/// Width of the page list on the left.
const SIDEBAR_WIDTH: u16 = 14;

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the sidebar, the current page
///   and the status line.
/// * **State Mapping**: Converting the search results and the library into
///   album tables.
/// * **Styling**: Applying the colours of the active theme.
/// * **Popups**: Drawing the album details on top of everything else.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: main, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    // Main layout: sidebar, content
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(outer[0]);

    draw_sidebar(f, main[0], app.main_view, &app.theme);

    let content = Block::default().padding(Padding::new(1, 1, 1, 0)).inner(main[1]);

    match app.main_view {
        MainView::Search => app
            .search_view
            .draw(f, content, &app.search, &app.library, &app.theme),
        MainView::Library => app.library_view.draw(f, content, &app.library, &app.theme),
        MainView::Settings => app.settings_view.draw(f, content, &app.theme),
    };

    draw_status(f, outer[1], app);

    if let Some(details) = &app.details {
        details.draw(f, area, &app.theme);
    }
}
