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

//! JSON payloads returned by the Spotify Web API.
//!
//! Only the fields the application uses are modelled. Optional parts of an
//! album (artists, images) default to empty so a single odd album does not
//! sink the whole page.

use serde::Deserialize;

use crate::model::{AlbumRecord, search::SearchPage};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    albums: AlbumsPage,
}

#[derive(Debug, Deserialize)]
struct AlbumsPage {
    items: Vec<AlbumItem>,
    limit: u32,
    total: u32,
}

#[derive(Debug, Deserialize)]
struct AlbumItem {
    id: String,
    name: String,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    artists: Vec<ArtistItem>,
    #[serde(default)]
    images: Vec<ImageItem>,
}

#[derive(Debug, Deserialize)]
struct ArtistItem {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ImageItem {
    url: String,
}

impl From<AlbumItem> for AlbumRecord {
    fn from(item: AlbumItem) -> Self {
        // The first artist and the first (largest) image stand in for the album
        let artist = item.artists.into_iter().next().map(|a| a.name).unwrap_or_default();
        let artwork_url = item.images.into_iter().next().map(|i| i.url).unwrap_or_default();

        Self {
            title: item.name,
            artist,
            id: item.id,
            release_date: item.release_date.unwrap_or_default(),
            artwork_url,
        }
    }
}

pub(super) fn parse_access_token(body: &str) -> Result<String, serde_json::Error> {
    let response: TokenResponse = serde_json::from_str(body)?;
    Ok(response.access_token)
}

/// Parses an album search response for the page starting at `offset`.
pub(super) fn parse_search_page(body: &str, offset: u32) -> Result<SearchPage, serde_json::Error> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let page = response.albums;

    let next_offset = offset.saturating_add(page.limit);

    Ok(SearchPage {
        albums: page.items.into_iter().map(AlbumRecord::from).collect(),
        total: page.total,
        has_more: next_offset < page.total,
        next_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"{
        "albums": {
            "href": "https://api.spotify.com/v1/search?query=low&type=album&offset=10&limit=10",
            "items": [
                {
                    "album_type": "album",
                    "id": "4uG8q3",
                    "name": "Low",
                    "release_date": "1977-01-14",
                    "release_date_precision": "day",
                    "artists": [{ "id": "a1", "name": "David Bowie" }, { "id": "a2", "name": "Brian Eno" }],
                    "images": [
                        { "url": "https://i.scdn.co/image/large", "height": 640, "width": 640 },
                        { "url": "https://i.scdn.co/image/small", "height": 64, "width": 64 }
                    ]
                },
                {
                    "id": "9zz",
                    "name": "Untitled",
                    "release_date": "1994",
                    "artists": [],
                    "images": []
                }
            ],
            "limit": 10,
            "next": null,
            "offset": 10,
            "previous": null,
            "total": 12
        }
    }"#;

    #[test]
    fn parses_search_page() {
        let page = parse_search_page(SEARCH_BODY, 10).unwrap();

        assert_eq!(page.total, 12);
        assert_eq!(page.next_offset, 20);
        assert!(!page.has_more);
        assert_eq!(page.albums.len(), 2);

        let low = &page.albums[0];
        assert_eq!(low.title, "Low");
        assert_eq!(low.artist, "David Bowie");
        assert_eq!(low.id, "4uG8q3");
        assert_eq!(low.release_date, "1977-01-14");
        assert_eq!(low.artwork_url, "https://i.scdn.co/image/large");
    }

    #[test]
    fn missing_artists_and_images_become_empty() {
        let page = parse_search_page(SEARCH_BODY, 10).unwrap();

        let untitled = &page.albums[1];
        assert_eq!(untitled.artist, "");
        assert_eq!(untitled.artwork_url, "");
        assert_eq!(untitled.release_date, "1994");
    }

    #[test]
    fn more_pages_when_offset_below_total() {
        let page = parse_search_page(SEARCH_BODY, 0).unwrap();

        assert_eq!(page.next_offset, 10);
        assert!(page.has_more);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_search_page("{\"albums\": {}}", 0).is_err());
        assert!(parse_search_page("<html>", 0).is_err());
    }

    #[test]
    fn parses_access_token() {
        let body = r#"{"access_token":"BQD","token_type":"Bearer","expires_in":3600}"#;

        assert_eq!(parse_access_token(body).unwrap(), "BQD");
    }

    #[test]
    fn null_release_date_becomes_empty() {
        let body = r#"{
            "albums": {
                "items": [
                    { "id": "n1", "name": "Nameless", "release_date": null, "artists": [], "images": [] },
                    { "id": "n2", "name": "Dateless", "artists": [], "images": [] }
                ],
                "limit": 10,
                "total": 2
            }
        }"#;

        let page = parse_search_page(body, 0).unwrap();

        assert_eq!(page.albums.len(), 2);
        assert_eq!(page.albums[0].release_date, "");
        assert_eq!(page.albums[1].release_date, "");
    }
}
