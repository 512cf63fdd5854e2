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

//! Render the page list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Paragraph},
};

use crate::{MainView, theme::Theme};

pub(crate) fn draw_sidebar(f: &mut Frame, area: Rect, current: MainView, theme: &Theme) {
    let lines: Vec<Line> = MainView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let text = format!("{} {}", i + 1, view.title());
            if *view == current {
                Line::styled(
                    text,
                    Style::default()
                        .fg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(text, Style::default().fg(theme.text_colour))
            }
        })
        .collect();

    let block = Block::default()
        .style(Style::default().bg(theme.sidebar_colour))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
