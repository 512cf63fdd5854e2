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

//! Library ordering.
//!
//! The library is always kept sorted under exactly one [`SortOrder`]. Every
//! order is a stable sort, so entries that compare equal keep their relative
//! position from before the sort.
//!
//! Release dates are compared as calendar dates when they parse as
//! `YYYY-MM-DD`. Anything else (the catalog also reports bare years and
//! year-month values) falls back to comparing the raw text, which can put
//! such dates somewhere calendar order would not.

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::LibraryEntry;

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum SortOrder {
    #[default]
    Artist,
    AlbumName,
    ReleaseDate,
    Rating,
}

impl SortOrder {
    pub(crate) fn label(self) -> &'static str {
        match self {
            SortOrder::Artist => "Artist",
            SortOrder::AlbumName => "Album Name",
            SortOrder::ReleaseDate => "Release Date",
            SortOrder::Rating => "Rating",
        }
    }

    /// The order after this one, wrapping around.
    pub(crate) fn next(self) -> Self {
        match self {
            SortOrder::Artist => SortOrder::AlbumName,
            SortOrder::AlbumName => SortOrder::ReleaseDate,
            SortOrder::ReleaseDate => SortOrder::Rating,
            SortOrder::Rating => SortOrder::Artist,
        }
    }
}

/// Parses a catalog release date, `None` if it is not a full `YYYY-MM-DD`.
pub(crate) fn parse_release_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, RELEASE_DATE_FORMAT).ok()
}

/// Comparable form of a release date.
///
/// Parseable dates are re-rendered in canonical zero-padded form, for which
/// string order and calendar order agree, so every pair of dates compares
/// through one consistent total order.
fn release_date_key(text: &str) -> String {
    match parse_release_date(text) {
        Some(date) => date.format(RELEASE_DATE_FORMAT).to_string(),
        None => text.to_string(),
    }
}

/// Sorts library entries in place under the given order.
pub(crate) fn sort_entries(entries: &mut [LibraryEntry], order: SortOrder) {
    match order {
        SortOrder::Artist => entries.sort_by_cached_key(|entry| {
            (
                entry.album.artist.to_lowercase(),
                Reverse(release_date_key(&entry.album.release_date)),
            )
        }),
        SortOrder::AlbumName => entries.sort_by_cached_key(|entry| entry.album.title.to_lowercase()),
        SortOrder::ReleaseDate => {
            entries.sort_by_cached_key(|entry| release_date_key(&entry.album.release_date))
        }
        // Unrated entries sink below every rated one, whatever their value
        SortOrder::Rating => entries.sort_by_cached_key(|entry| {
            (
                !entry.is_rated(),
                Reverse(entry.rating),
                entry.album.artist.to_lowercase(),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AlbumRecord;

    fn entry(id: &str, title: &str, artist: &str, release_date: &str, rating: i32) -> LibraryEntry {
        LibraryEntry {
            album: AlbumRecord {
                title: title.to_string(),
                artist: artist.to_string(),
                id: id.to_string(),
                release_date: release_date.to_string(),
                artwork_url: String::new(),
            },
            rating,
            artwork: vec![],
        }
    }

    fn ids(entries: &[LibraryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.album.id.as_str()).collect()
    }

    #[test]
    fn rating_order_puts_unrated_last() {
        let mut entries = vec![
            entry("a", "A", "Same", "2000-01-01", 0),
            entry("b", "B", "Same", "2000-01-01", 7),
            entry("c", "C", "Same", "2000-01-01", 0),
            entry("d", "D", "Same", "2000-01-01", 9),
            entry("e", "E", "Same", "2000-01-01", 3),
        ];

        sort_entries(&mut entries, SortOrder::Rating);

        let ratings: Vec<i32> = entries.iter().map(|e| e.rating).collect();
        assert_eq!(ratings, vec![9, 7, 3, 0, 0]);
        // Equal artists, so the two unrated entries keep their order
        assert_eq!(ids(&entries), vec!["d", "b", "e", "a", "c"]);
    }

    #[test]
    fn rating_order_breaks_ties_by_artist() {
        let mut entries = vec![
            entry("a", "A", "Zappa", "", 0),
            entry("b", "B", "abba", "", 0),
            entry("c", "C", "Yes", "", 5),
            entry("d", "D", "Beck", "", 5),
        ];

        sort_entries(&mut entries, SortOrder::Rating);

        assert_eq!(ids(&entries), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn artist_order_is_case_insensitive_newest_first() {
        let mut entries = vec![
            entry("old", "Debut", "Bjork", "2020-01-01", 0),
            entry("new", "Later", "bjork", "2022-06-01", 0),
            entry("abba", "Arrival", "ABBA", "1976-10-11", 0),
        ];

        sort_entries(&mut entries, SortOrder::Artist);

        assert_eq!(ids(&entries), vec!["abba", "new", "old"]);
    }

    #[test]
    fn artist_order_falls_back_to_raw_dates() {
        let mut entries = vec![
            entry("a", "A", "Can", "1971", 0),
            entry("b", "B", "Can", "1973", 0),
            entry("c", "C", "Can", "1972-11-01", 0),
        ];

        sort_entries(&mut entries, SortOrder::Artist);

        // Raw text, descending: "1973" > "1972-11-01" > "1971"
        assert_eq!(ids(&entries), vec!["b", "c", "a"]);
    }

    #[test]
    fn album_name_order_is_case_insensitive_and_stable() {
        let mut entries = vec![
            entry("a", "zoo", "X", "", 0),
            entry("b", "Alpha", "X", "", 0),
            entry("c", "alpha", "Y", "", 0),
        ];

        sort_entries(&mut entries, SortOrder::AlbumName);

        assert_eq!(ids(&entries), vec!["b", "c", "a"]);
    }

    #[test]
    fn release_date_order_is_ascending() {
        let mut entries = vec![
            entry("a", "A", "X", "2001-05-01", 0),
            entry("b", "B", "X", "1999-12-31", 0),
            entry("c", "C", "X", "2001-05-01", 0),
            entry("d", "D", "X", "1985", 0),
        ];

        sort_entries(&mut entries, SortOrder::ReleaseDate);

        assert_eq!(ids(&entries), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn next_cycles_through_every_order() {
        let mut order = SortOrder::Artist;
        for expected in [SortOrder::AlbumName, SortOrder::ReleaseDate, SortOrder::Rating] {
            order = order.next();
            assert_eq!(order, expected);
        }
        assert_eq!(order.next(), SortOrder::Artist);
    }

    #[test]
    fn parse_release_date_requires_full_date() {
        assert!(parse_release_date("2020-02-29").is_some());
        assert!(parse_release_date("2021-02-29").is_none());
        assert!(parse_release_date("2020").is_none());
        assert!(parse_release_date("").is_none());
    }
}
