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

//! UI rendering logic for the library view.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{AlbumRow, LibraryView},
    model::Library,
    theme::Theme,
    util::format::{format_rating, format_release_date},
};

impl LibraryView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, library: &Library, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let mut header_text = format!(
            "Library | {} albums | Sort by: {}",
            library.len(),
            library.sort_order().label()
        );

        let rated = library.entries().iter().filter(|entry| entry.is_rated()).count();
        if rated > 0 {
            let _ = write!(header_text, " | {} rated", rated);
        }

        if library.is_empty() {
            header_text.push_str(" | Press 1 and add albums from a search");
        }

        let header = Paragraph::new(header_text)
            .style(Style::default().fg(theme.text_colour))
            .block(Block::default().borders(Borders::BOTTOM).padding(Padding::horizontal(1)));

        f.render_widget(header, chunks[0]);

        let rows: Vec<AlbumRow> = library
            .entries()
            .iter()
            .map(|entry| AlbumRow {
                marker: String::new(),
                artist: entry.album.artist.clone(),
                title: entry.album.title.clone(),
                release_date: format_release_date(&entry.album.release_date),
                rating: format_rating(entry.rating),
            })
            .collect();

        self.album_table.draw(f, chunks[1], &rows, theme);
    }
}
