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

//! The user's album library.
//!
//! The library owns every saved [`LibraryEntry`] as an ordered sequence,
//! alongside the set of catalog identifiers present in that sequence for
//! constant-time "already saved?" checks. Every mutating method updates the
//! sequence and the identifier set together.
//!
//! Mutations never fail. A rejected or out-of-range request is simply a
//! no-op, reported through the return value so the caller knows whether the
//! library needs to be persisted.

use std::collections::HashSet;

use crate::model::{
    AlbumRecord, LibraryEntry, clamp_rating,
    sort::{SortOrder, sort_entries},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Library {
    entries: Vec<LibraryEntry>,
    ids: HashSet<String>,
    sort_order: SortOrder,
}

impl Library {
    pub(crate) fn new(sort_order: SortOrder) -> Self {
        Self {
            entries: vec![],
            ids: HashSet::new(),
            sort_order,
        }
    }

    /// Builds a library from already decoded entries, keeping their order.
    ///
    /// Entries whose identifier was already seen are dropped and returned so
    /// the caller can report them.
    pub(crate) fn from_entries(entries: Vec<LibraryEntry>) -> (Self, Vec<LibraryEntry>) {
        let mut library = Self::default();
        let mut duplicates = vec![];

        for entry in entries {
            if library.ids.insert(entry.album.id.clone()) {
                library.entries.push(entry);
            } else {
                duplicates.push(entry);
            }
        }

        (library, duplicates)
    }

    pub(crate) fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub(crate) fn get(&self, position: usize) -> Option<&LibraryEntry> {
        self.entries.get(position)
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        self.entries.iter().position(|entry| entry.album.id == id)
    }

    pub(crate) fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Saves an album, unless an album with the same identifier is already
    /// in the library.
    ///
    /// Returns `true` if the album was added.
    pub(crate) fn add(&mut self, album: AlbumRecord, artwork: Vec<u8>) -> bool {
        if !self.ids.insert(album.id.clone()) {
            return false;
        }

        self.entries.push(LibraryEntry::new(album, artwork));
        self.sort();

        true
    }

    /// Removes the entry at `position` in the current order.
    ///
    /// A position outside the sequence is ignored.
    pub(crate) fn remove(&mut self, position: usize) -> Option<LibraryEntry> {
        if position >= self.entries.len() {
            return None;
        }

        let entry = self.entries.remove(position);
        self.ids.remove(&entry.album.id);

        Some(entry)
    }

    /// Rates the album with the given identifier, clamping the rating into
    /// the valid range.
    ///
    /// Returns `true` if an album with that identifier exists.
    pub(crate) fn set_rating(&mut self, id: &str, rating: i32) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };

        entry.rating = clamp_rating(rating);

        if self.sort_order == SortOrder::Rating {
            self.sort();
        }

        true
    }

    /// Stores artwork for an album that was saved before its artwork had
    /// finished downloading.
    pub(crate) fn set_artwork(&mut self, id: &str, artwork: Vec<u8>) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.artwork = artwork;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
        self.sort();
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut LibraryEntry> {
        if !self.ids.contains(id) {
            return None;
        }
        self.entries.iter_mut().find(|entry| entry.album.id == id)
    }

    fn sort(&mut self) {
        sort_entries(&mut self.entries, self.sort_order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(id: &str, artist: &str) -> AlbumRecord {
        AlbumRecord {
            title: format!("Title {id}"),
            artist: artist.to_string(),
            id: id.to_string(),
            release_date: "2000-01-01".to_string(),
            artwork_url: format!("https://i.scdn.co/image/{id}"),
        }
    }

    fn ids_match(library: &Library) -> bool {
        let from_entries: HashSet<String> = library
            .entries()
            .iter()
            .map(|entry| entry.album.id.clone())
            .collect();
        from_entries == library.ids && from_entries.len() == library.len()
    }

    #[test]
    fn add_is_idempotent_per_identifier() {
        let mut library = Library::new(SortOrder::Artist);

        assert!(library.add(album("1", "Low"), vec![1]));
        assert!(!library.add(album("1", "Low"), vec![2]));

        assert_eq!(library.len(), 1);
        assert_eq!(library.entries()[0].artwork, vec![1]);
        assert!(ids_match(&library));
    }

    #[test]
    fn add_keeps_active_order() {
        let mut library = Library::new(SortOrder::Artist);
        library.add(album("1", "Wire"), vec![]);
        library.add(album("2", "Can"), vec![]);
        library.add(album("3", "Low"), vec![]);

        let artists: Vec<&str> = library
            .entries()
            .iter()
            .map(|e| e.album.artist.as_str())
            .collect();
        assert_eq!(artists, vec!["Can", "Low", "Wire"]);
    }

    #[test]
    fn remove_out_of_bounds_is_a_no_op() {
        let mut library = Library::new(SortOrder::Artist);
        library.add(album("1", "Low"), vec![]);
        let before = library.clone();

        assert!(library.remove(1).is_none());
        assert!(library.remove(usize::MAX).is_none());

        assert_eq!(library, before);
    }

    #[test]
    fn remove_updates_sequence_and_identifiers() {
        let mut library = Library::new(SortOrder::Artist);
        library.add(album("1", "Can"), vec![]);
        library.add(album("2", "Low"), vec![]);

        let removed = library.remove(0).map(|e| e.album.id);

        assert_eq!(removed.as_deref(), Some("1"));
        assert!(!library.contains("1"));
        assert!(library.contains("2"));
        assert!(ids_match(&library));
    }

    #[test]
    fn set_rating_clamps() {
        let mut library = Library::new(SortOrder::Artist);
        library.add(album("1", "Low"), vec![]);

        assert!(library.set_rating("1", -5));
        assert_eq!(library.entries()[0].rating, 0);

        assert!(library.set_rating("1", 99));
        assert_eq!(library.entries()[0].rating, 10);
    }

    #[test]
    fn set_rating_unknown_identifier_is_a_no_op() {
        let mut library = Library::new(SortOrder::Artist);
        library.add(album("1", "Low"), vec![]);
        let before = library.clone();

        assert!(!library.set_rating("missing", 5));
        assert_eq!(library, before);
    }

    #[test]
    fn set_rating_resorts_in_rating_order() {
        let mut library = Library::new(SortOrder::Rating);
        library.add(album("1", "Can"), vec![]);
        library.add(album("2", "Low"), vec![]);
        assert_eq!(library.entries()[0].album.id, "1");

        library.set_rating("2", 8);

        assert_eq!(library.entries()[0].album.id, "2");
        assert_eq!(library.position_of("1"), Some(1));
    }

    #[test]
    fn set_rating_keeps_order_in_other_modes() {
        let mut library = Library::new(SortOrder::Artist);
        library.add(album("1", "Can"), vec![]);
        library.add(album("2", "Low"), vec![]);

        library.set_rating("2", 8);

        assert_eq!(library.entries()[0].album.id, "1");
    }

    #[test]
    fn set_artwork_fills_existing_entry() {
        let mut library = Library::new(SortOrder::Artist);
        library.add(album("1", "Low"), vec![]);

        assert!(library.set_artwork("1", vec![9, 9]));
        assert!(!library.set_artwork("2", vec![1]));
        assert_eq!(library.entries()[0].artwork, vec![9, 9]);
    }

    #[test]
    fn from_entries_drops_duplicates() {
        let entries = vec![
            LibraryEntry::new(album("1", "Low"), vec![1]),
            LibraryEntry::new(album("1", "Low"), vec![2]),
            LibraryEntry::new(album("2", "Can"), vec![3]),
        ];

        let (library, duplicates) = Library::from_entries(entries);

        assert_eq!(library.len(), 2);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(library.entries()[0].artwork, vec![1]);
        // Decoded order is kept as-is
        assert_eq!(library.entries()[1].album.id, "2");
        assert!(ids_match(&library));
    }

    #[test]
    fn set_sort_order_reorders() {
        let mut library = Library::new(SortOrder::Artist);
        library.add(album("b", "Can"), vec![]);
        library.add(album("a", "Low"), vec![]);
        library.set_rating("a", 4);

        library.set_sort_order(SortOrder::Rating);

        assert_eq!(library.sort_order(), SortOrder::Rating);
        assert_eq!(library.entries()[0].album.id, "a");
    }
}
