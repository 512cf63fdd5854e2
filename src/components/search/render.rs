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

//! UI rendering logic for the search view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{AlbumRow, SearchView},
    model::{Library, search::Search},
    theme::Theme,
    util::format::format_release_date,
};

/// Marker shown next to results that are already in the library.
const IN_LIBRARY_MARKER: &str = "✓";

impl SearchView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, search: &Search, library: &Library, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let border_colour = if self.editing {
            theme.accent_colour
        } else {
            theme.text_colour
        };

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Search albums ")
            .padding(Padding::horizontal(1));
        let input_area = input_block.inner(chunks[0]);

        f.render_widget(
            Paragraph::new(self.input.value())
                .style(Style::default().fg(theme.text_colour))
                .block(input_block),
            chunks[0],
        );

        if self.editing {
            let cursor_x = input_area.x + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x, input_area.y));
        }

        let header = if search.query().is_empty() {
            String::new()
        } else if search.has_more() {
            format!("{} | n: load more", search.status())
        } else {
            search.status()
        };

        f.render_widget(
            Paragraph::new(header)
                .style(Style::default().fg(theme.text_colour))
                .block(Block::default().borders(Borders::BOTTOM).padding(Padding::horizontal(1))),
            chunks[1],
        );

        let rows: Vec<AlbumRow> = search
            .results()
            .iter()
            .map(|result| AlbumRow {
                marker: if library.contains(&result.album.id) {
                    IN_LIBRARY_MARKER.to_string()
                } else {
                    String::new()
                },
                artist: result.album.artist.clone(),
                title: result.album.title.clone(),
                release_date: format_release_date(&result.album.release_date),
                rating: String::new(),
            })
            .collect();

        self.album_table.draw(f, chunks[2], &rows, theme);
    }
}
