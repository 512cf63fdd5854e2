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

//! Album details popup.
//!
//! Shows everything known about one album on top of the current view. The
//! popup holds a snapshot taken when it was opened, it does not follow later
//! changes to the library.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    model::{AlbumRecord, LibraryEntry, artwork::ArtworkFormat, search::SearchResult},
    theme::Theme,
    util::format::{format_rating, format_rating_bar, format_release_date, format_size},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AlbumDetails {
    album: AlbumRecord,
    /// `None` for albums that are not in the library.
    rating: Option<i32>,
    artwork: Option<(ArtworkFormat, usize)>,
}

impl AlbumDetails {
    pub(crate) fn from_search_result(result: &SearchResult) -> Self {
        Self {
            album: result.album.clone(),
            rating: None,
            artwork: result.artwork.as_deref().map(describe_artwork),
        }
    }

    pub(crate) fn from_library_entry(entry: &LibraryEntry) -> Self {
        let artwork = if entry.artwork.is_empty() {
            None
        } else {
            Some(describe_artwork(&entry.artwork))
        };

        Self {
            album: entry.album.clone(),
            rating: Some(entry.rating),
            artwork,
        }
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered(area, 60, 12);

        let label = Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD);
        let value = Style::default().fg(theme.text_colour);

        let field = |name: &'static str, text: String| {
            Line::from(vec![Span::styled(format!("{:<10}", name), label), Span::styled(text, value)])
        };

        let rating = match self.rating {
            Some(rating) if rating > 0 => format!("{} {}", format_rating_bar(rating), format_rating(rating)),
            Some(_) => "Not rated".to_string(),
            None => "Not in library".to_string(),
        };

        let artwork = match self.artwork {
            Some((format, size)) => format!("{}, {}", format.display_name(), format_size(size)),
            None => "None".to_string(),
        };

        let lines = vec![
            field("Artist", self.album.artist.clone()),
            field("Released", format_release_date(&self.album.release_date)),
            field("Rating", rating),
            field("Artwork", artwork),
            field("Id", self.album.id.clone()),
            Line::default(),
            Line::styled("Esc to close", value.add_modifier(Modifier::DIM)),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(format!(" {} ", self.album.title))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.background_colour));

        f.render_widget(Clear, popup);
        f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), popup);
    }
}

fn describe_artwork(bytes: &[u8]) -> (ArtworkFormat, usize) {
    (ArtworkFormat::sniff(bytes), bytes.len())
}

/// A `width` by `height` rectangle in the middle of `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn search_result_details_have_no_rating() {
        let result = SearchResult {
            album: AlbumRecord {
                id: "1".to_string(),
                ..AlbumRecord::default()
            },
            artwork: Some(PNG.to_vec()),
        };

        let details = AlbumDetails::from_search_result(&result);

        assert_eq!(details.rating, None);
        assert_eq!(details.artwork, Some((ArtworkFormat::Png, 8)));
        assert_eq!(details.album.id, "1");
    }

    #[test]
    fn library_entry_without_artwork() {
        let mut entry = LibraryEntry::new(AlbumRecord::default(), vec![]);
        entry.rating = 6;

        let details = AlbumDetails::from_library_entry(&entry);

        assert_eq!(details.rating, Some(6));
        assert_eq!(details.artwork, None);
    }

    #[test]
    fn popup_is_centered_and_fits() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 60, 12), Rect::new(20, 14, 60, 12));

        let small = Rect::new(0, 0, 30, 5);
        assert_eq!(centered(small, 60, 12), Rect::new(0, 0, 30, 5));
    }
}
