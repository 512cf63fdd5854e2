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

//! Spotify Web API client.
//!
//! A small, blocking client: a one-off client-credentials token
//! exchange, paginated album search, and artwork download. It is only ever
//! used from the background task worker, so blocking calls never stall the
//! UI.

mod response;

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::search::SearchPage;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SEARCH_URL: &str = "https://api.spotify.com/v1/search";

/// Number of albums requested per search page.
pub(crate) const PAGE_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("Spotify client credentials are not configured")]
    MissingCredentials,

    #[error("Spotify authentication failed: {0}")]
    Authentication(String),

    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response from Spotify: {0}")]
    Response(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
}

impl Credentials {
    fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

pub(crate) struct SpotifyClient {
    http: Client,
    credentials: Credentials,
    access_token: Option<String>,
}

impl SpotifyClient {
    pub(crate) fn new(credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            credentials,
            access_token: None,
        }
    }

    /// Searches the catalog for albums matching `query`, starting at
    /// `offset` into the full result list.
    pub(crate) fn search_albums(&mut self, query: &str, offset: u32) -> Result<SearchPage, CatalogError> {
        let token = self.access_token()?;

        debug!(query, offset, "searching catalog");

        let limit = PAGE_SIZE.to_string();
        let start = offset.to_string();

        let body = self
            .http
            .get(SEARCH_URL)
            .bearer_auth(token)
            .query(&[
                ("q", query),
                ("type", "album"),
                ("limit", limit.as_str()),
                ("offset", start.as_str()),
            ])
            .send()?
            .error_for_status()?
            .text()?;

        let page = response::parse_search_page(&body, offset)?;

        info!(query, offset, total = page.total, albums = page.albums.len(), "search complete");

        Ok(page)
    }

    /// Downloads the image at `url`.
    pub(crate) fn fetch_artwork(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        let bytes = self.http.get(url).send()?.error_for_status()?.bytes()?;
        Ok(bytes.to_vec())
    }

    /// The bearer token, exchanging the client credentials for one the first
    /// time it is needed.
    fn access_token(&mut self) -> Result<String, CatalogError> {
        if let Some(token) = &self.access_token {
            return Ok(token.clone());
        }

        if !self.credentials.is_complete() {
            return Err(CatalogError::MissingCredentials);
        }

        let response = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(CatalogError::Authentication(format!("{status}: {body}")));
        }

        let token = response::parse_access_token(&body)?;
        info!("authenticated with Spotify");

        self.access_token = Some(token.clone());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_without_credentials_fails_before_any_request() {
        let mut client = SpotifyClient::new(Credentials::default());

        let result = client.search_albums("low", 0);

        assert!(matches!(result, Err(CatalogError::MissingCredentials)));
    }

    #[test]
    fn credentials_need_both_parts() {
        let partial = Credentials {
            client_id: "id".to_string(),
            client_secret: String::new(),
        };
        assert!(!partial.is_complete());

        let full = Credentials {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
        };
        assert!(full.is_complete());
    }
}
