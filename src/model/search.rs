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

//! Catalog search state.
//!
//! This module holds the results of the current catalog search, page by
//! page, together with the artwork downloaded for each result so far.

use crate::model::AlbumRecord;

/// One page of albums returned by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SearchPage {
    pub(crate) albums: Vec<AlbumRecord>,
    pub(crate) total: u32,
    pub(crate) has_more: bool,
    pub(crate) next_offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchResult {
    pub(crate) album: AlbumRecord,
    pub(crate) artwork: Option<Vec<u8>>,
}

/// What a downloaded piece of artwork should be attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ArtworkTarget {
    SearchResult(String),
    LibraryEntry(String),
}

#[derive(Debug, Default)]
pub(crate) struct Search {
    query: String,
    results: Vec<SearchResult>,
    total: u32,
    has_more: bool,
    next_offset: u32,
}

impl Search {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts a new search, discarding the previous results.
    pub(crate) fn start(&mut self, query: &str) {
        *self = Self {
            query: query.to_string(),
            ..Self::default()
        };
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub(crate) fn get(&self, position: usize) -> Option<&SearchResult> {
        self.results.get(position)
    }

    pub(crate) fn has_more(&self) -> bool {
        self.has_more
    }

    pub(crate) fn next_offset(&self) -> u32 {
        self.next_offset
    }

    /// Appends a page of results, returning the albums that were added.
    pub(crate) fn append_page(&mut self, page: SearchPage) -> &[SearchResult] {
        let first_new = self.results.len();

        // The total is taken from the first page only, later pages can
        // report a different figure as the catalog index shifts
        if first_new == 0 {
            self.total = page.total;
        }
        self.has_more = page.has_more;
        self.next_offset = page.next_offset;

        self.results
            .extend(page.albums.into_iter().map(|album| SearchResult { album, artwork: None }));

        &self.results[first_new..]
    }

    /// Attaches downloaded artwork to every result with the given
    /// identifier. The same album can come back on more than one page.
    pub(crate) fn set_artwork(&mut self, id: &str, artwork: Vec<u8>) -> bool {
        let mut found = false;
        for result in self.results.iter_mut().filter(|result| result.album.id == id) {
            result.artwork = Some(artwork.clone());
            found = true;
        }
        found
    }

    pub(crate) fn status(&self) -> String {
        format!("Showing {} of {} results", self.results.len(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[&str], total: u32, next_offset: u32) -> SearchPage {
        SearchPage {
            albums: ids
                .iter()
                .map(|id| AlbumRecord {
                    id: id.to_string(),
                    ..AlbumRecord::default()
                })
                .collect(),
            total,
            has_more: next_offset < total,
            next_offset,
        }
    }

    #[test]
    fn pages_accumulate() {
        let mut search = Search::new();
        search.start("low");

        let added = search.append_page(page(&["a", "b"], 3, 2)).len();
        assert_eq!(added, 2);
        assert!(search.has_more());

        let added: Vec<String> = search
            .append_page(page(&["c"], 5, 3))
            .iter()
            .map(|r| r.album.id.clone())
            .collect();
        assert_eq!(added, vec!["c"]);

        assert_eq!(search.results().len(), 3);
        assert_eq!(search.total, 3);
        assert_eq!(search.next_offset(), 3);
        assert_eq!(search.status(), "Showing 3 of 3 results");
    }

    #[test]
    fn start_discards_previous_results() {
        let mut search = Search::new();
        search.start("low");
        search.append_page(page(&["a"], 1, 1));

        search.start("can");

        assert_eq!(search.query(), "can");
        assert!(search.results().is_empty());
        assert_eq!(search.total, 0);
        assert!(!search.has_more());
    }

    #[test]
    fn set_artwork_targets_matching_result() {
        let mut search = Search::new();
        search.append_page(page(&["a", "b"], 2, 2));

        assert!(search.set_artwork("b", vec![1]));
        assert!(!search.set_artwork("z", vec![1]));

        assert_eq!(search.get(0).and_then(|r| r.artwork.clone()), None);
        assert_eq!(search.get(1).and_then(|r| r.artwork.clone()), Some(vec![1]));
    }

    #[test]
    fn artwork_reaches_every_copy_of_a_repeated_album() {
        let mut search = Search::new();
        search.start("low");
        search.append_page(page(&["a", "b"], 4, 2));
        search.append_page(page(&["c", "a"], 4, 4));

        assert!(search.set_artwork("a", vec![7]));

        let artwork: Vec<_> = search.results().iter().map(|r| r.artwork.clone()).collect();
        assert_eq!(artwork, vec![Some(vec![7]), None, None, Some(vec![7])]);
        assert!(!search.set_artwork("zz", vec![1]));
    }
}
