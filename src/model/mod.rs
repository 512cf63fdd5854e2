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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the albums
//! returned by the catalog and the entries saved into the user's library,
//! together with the rating rules shared by the library and the UI.

pub(crate) mod artwork;
pub(crate) mod library;
pub(crate) mod requests;
pub(crate) mod search;
pub(crate) mod sort;

pub(crate) use library::Library;
pub(crate) use sort::SortOrder;

/// Highest rating an album can be given.
pub(crate) const MAX_RATING: i32 = 10;

/// Rating value meaning "not rated yet".
pub(crate) const UNRATED: i32 = 0;

/// Catalog facts about an album, as fetched from the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AlbumRecord {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) id: String,
    pub(crate) release_date: String,
    pub(crate) artwork_url: String,
}

/// An album saved in the library, with the user's rating and cached artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LibraryEntry {
    pub(crate) album: AlbumRecord,
    pub(crate) rating: i32,
    pub(crate) artwork: Vec<u8>,
}

impl LibraryEntry {
    pub(crate) fn new(album: AlbumRecord, artwork: Vec<u8>) -> Self {
        Self {
            album,
            rating: UNRATED,
            artwork,
        }
    }

    pub(crate) fn is_rated(&self) -> bool {
        self.rating != UNRATED
    }
}

/// Clamps a rating into the valid `0..=MAX_RATING` range.
pub(crate) fn clamp_rating(rating: i32) -> i32 {
    rating.clamp(UNRATED, MAX_RATING)
}
