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

//! UI rendering logic for the album table.
//!
//! This module handles the visual representation of album rows, including
//! column layout, selection highlighting, and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::AlbumTable, theme::Theme};

/// One album, already formatted for display.
#[derive(Debug, Clone, Default)]
pub(crate) struct AlbumRow {
    pub(crate) marker: String,
    pub(crate) artist: String,
    pub(crate) title: String,
    pub(crate) release_date: String,
    pub(crate) rating: String,
}

impl AlbumTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, rows: &[AlbumRow], theme: &Theme) {
        let text = Style::default().fg(theme.text_colour);
        let accent = Style::default().fg(theme.accent_colour);

        let rows = rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(Line::from(row.marker.as_str()).style(accent)),
                Cell::from(Line::from(row.artist.as_str()).style(accent)),
                Cell::from(Line::from(row.title.as_str()).style(text)),
                Cell::from(Line::from(row.release_date.as_str()).style(text)),
                Cell::from(Line::from(row.rating.as_str()).style(accent).alignment(Alignment::Right)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Length(20),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Artist"),
                Cell::from("Album"),
                Cell::from("Released"),
                Cell::from(Line::from("Rating").alignment(Alignment::Right)),
            ])
            .style(accent.add_modifier(Modifier::BOLD))
            .bottom_margin(1),
        )
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .bg(theme.accent_colour)
                .fg(theme.highlight_fg()),
        )
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
