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

//! Render the status line.
//!
//! The left side shows the latest status message, the right side the keys
//! that do something on the current page.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
};

use crate::{App, MainView};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let hints = key_hints(app);

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(hints.chars().count() as u16)])
        .horizontal_margin(1)
        .split(area);

    let style = Style::default()
        .fg(app.theme.text_colour)
        .bg(app.theme.sidebar_colour);

    f.render_widget(Block::default().style(style), area);
    f.render_widget(Paragraph::new(app.status.as_str()).style(style), container[0]);
    f.render_widget(
        Paragraph::new(hints).style(style.fg(app.theme.accent_colour)),
        container[1],
    );
}

fn key_hints(app: &App) -> &'static str {
    if app.details.is_some() {
        return "Esc close";
    }

    match app.main_view {
        MainView::Search if app.search_view.is_editing() => "Enter search  Esc results",
        MainView::Search => "/ search  a add  n more  Enter details  q quit",
        MainView::Library => "s sort  +/- rate  x clear  d remove  Enter details  q quit",
        MainView::Settings => "j/k choose theme  q quit",
    }
}
