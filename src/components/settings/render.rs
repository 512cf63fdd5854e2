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

//! UI rendering logic for the settings view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::SettingsView,
    theme::{THEMES, Theme},
};

const SWATCH: &str = "██";

impl SettingsView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        f.render_widget(
            Paragraph::new(format!("Theme: {}", theme.name))
                .style(Style::default().fg(theme.text_colour))
                .block(Block::default().borders(Borders::BOTTOM).padding(Padding::horizontal(1))),
            chunks[0],
        );

        let items: Vec<ListItem> = THEMES
            .iter()
            .map(|candidate| {
                ListItem::new(Line::from(vec![
                    Span::styled(SWATCH, Style::default().fg(candidate.background_colour)),
                    Span::styled(SWATCH, Style::default().fg(candidate.sidebar_colour)),
                    Span::styled(SWATCH, Style::default().fg(candidate.accent_colour)),
                    Span::raw(" "),
                    Span::raw(candidate.name),
                ]))
            })
            .collect();

        let list = List::new(items)
            .style(Style::default().fg(theme.text_colour))
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_style(
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
