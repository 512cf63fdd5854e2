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

//! Handlers that apply events and view actions to the application state.
//!
//! Every change to the library goes through here, and every change that
//! actually altered the library is followed by a save.

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::{
    App,
    components::{AlbumDetails, LibraryAction, SearchAction, SettingsAction},
    config::save_config,
    model::{
        SortOrder,
        requests::RequestToken,
        search::{ArtworkTarget, SearchPage},
    },
    tasks::AppTask,
    theme::{THEMES, Theme},
    util,
};

pub(super) fn handle_search_results_ready(app: &mut App, token: RequestToken, page: SearchPage) -> Result<()> {
    if app.search_requests.complete(token).is_none() {
        warn!(?token, "dropping results for a search that was replaced");
        return Ok(());
    }

    let urls: Vec<(String, String)> = app
        .search
        .append_page(page)
        .iter()
        .filter(|result| !result.album.artwork_url.is_empty())
        .map(|result| (result.album.id.clone(), result.album.artwork_url.clone()))
        .collect();

    for (id, url) in urls {
        let token = app.artwork_requests.register(ArtworkTarget::SearchResult(id));
        app.task_tx.send(AppTask::FetchArtwork { token, url })?;
    }

    let len = app.search.results().len();
    app.search_view.album_table.clamp(len);
    app.status = app.search.status();

    Ok(())
}

pub(super) fn handle_search_failed(app: &mut App, token: RequestToken, message: String) {
    if app.search_requests.complete(token).is_none() {
        warn!(?token, "dropping failure for a search that was replaced");
        return;
    }

    app.status = format!("Search failed: {message}");
}

pub(super) fn handle_artwork_ready(app: &mut App, token: RequestToken, artwork: Option<Vec<u8>>) {
    let Some(target) = app.artwork_requests.complete(token) else {
        debug!(?token, "dropping artwork nobody is waiting for");
        return;
    };

    // Failed downloads are not retried, the album simply has no artwork
    let Some(artwork) = artwork else {
        return;
    };

    match target {
        ArtworkTarget::SearchResult(id) => {
            app.search.set_artwork(&id, artwork);
        }
        ArtworkTarget::LibraryEntry(id) => {
            app.search.set_artwork(&id, artwork.clone());
            if app.library.set_artwork(&id, artwork) {
                persist_library(app);
            }
        }
    }
}

pub(super) fn handle_search_action(app: &mut App, action: SearchAction) -> Result<()> {
    match action {
        SearchAction::Submit(query) => start_search(app, &query),
        SearchAction::LoadMore => load_more(app),
        SearchAction::AddToLibrary(position) => {
            add_to_library(app, position);
            Ok(())
        }
        SearchAction::ShowDetails(position) => {
            app.details = app.search.get(position).map(AlbumDetails::from_search_result);
            Ok(())
        }
    }
}

pub(super) fn handle_library_action(app: &mut App, action: LibraryAction) {
    match action {
        LibraryAction::CycleSortOrder => {
            let sort_order = app.library.sort_order().next();
            set_sort_order(app, sort_order);
        }
        LibraryAction::Rate { id, rating } => rate(app, &id, rating),
        LibraryAction::Remove(position) => remove(app, position),
        LibraryAction::ShowDetails(position) => {
            app.details = app.library.get(position).map(AlbumDetails::from_library_entry);
        }
    }
}

pub(super) fn handle_settings_action(app: &mut App, action: SettingsAction) {
    match action {
        SettingsAction::ApplyTheme(index) => {
            if let Some(theme) = THEMES.get(index) {
                apply_theme(app, *theme);
            }
        }
    }
}

fn start_search(app: &mut App, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        app.status = "Please enter a search term".to_string();
        return Ok(());
    }

    app.search.start(query);
    app.search_view.reset_results();

    // Anything still in flight belongs to the old results
    app.search_requests.discard(|_| true);
    app.artwork_requests
        .discard(|target| matches!(target, ArtworkTarget::SearchResult(_)));

    send_search(app, 0)?;
    app.status = "Searching...".to_string();

    info!(query, "new search");

    Ok(())
}

fn load_more(app: &mut App) -> Result<()> {
    if !app.search.has_more() || !app.search_requests.is_empty() {
        return Ok(());
    }

    let offset = app.search.next_offset();
    send_search(app, offset)?;
    app.status = format!("{} | Loading more...", app.search.status());

    Ok(())
}

fn send_search(app: &mut App, offset: u32) -> Result<()> {
    let token = app.search_requests.register(offset);
    app.task_tx.send(AppTask::Search {
        token,
        query: app.search.query().to_string(),
        offset,
    })?;

    Ok(())
}

fn add_to_library(app: &mut App, position: usize) {
    let Some(result) = app.search.get(position) else {
        return;
    };

    let id = result.album.id.clone();
    let title = result.album.title.clone();

    if !app
        .library
        .add(result.album.clone(), result.artwork.clone().unwrap_or_default())
    {
        app.status = format!("'{title}' is already in the library");
        return;
    }

    // Artwork still downloading goes to the library entry when it arrives
    if result.artwork.is_none() {
        let search_target = ArtworkTarget::SearchResult(id.clone());
        app.artwork_requests
            .retarget(|target| *target == search_target, || ArtworkTarget::LibraryEntry(id.clone()));
    }

    info!(%id, "added album to library");
    app.status = format!("Added '{title}' to the library");

    persist_library(app);
}

fn remove(app: &mut App, position: usize) {
    let Some(entry) = app.library.remove(position) else {
        return;
    };

    let id = entry.album.id;
    app.artwork_requests
        .discard(|target| matches!(target, ArtworkTarget::LibraryEntry(pending) if *pending == id));

    app.library_view.album_table.clamp(app.library.len());

    info!(%id, "removed album from library");
    app.status = format!("Removed '{}' from the library", entry.album.title);

    persist_library(app);
}

fn rate(app: &mut App, id: &str, rating: i32) {
    let Some(position) = app.library.position_of(id) else {
        return;
    };
    let before = app.library.get(position).map(|entry| entry.rating);

    app.library.set_rating(id, rating);

    let after = app.library.position_of(id);
    if after.and_then(|position| app.library.get(position)).map(|entry| entry.rating) == before {
        return;
    }

    app.library_view.follow(after, app.library.len());

    persist_library(app);
}

fn set_sort_order(app: &mut App, sort_order: SortOrder) {
    let selected_id = app
        .library_view
        .album_table
        .selected(app.library.len())
        .and_then(|position| app.library.get(position))
        .map(|entry| entry.album.id.clone());

    app.library.set_sort_order(sort_order);

    let position = selected_id.and_then(|id| app.library.position_of(&id));
    app.library_view.follow(position, app.library.len());

    app.status = format!("Sorted by {}", sort_order.label());

    app.config.sort_order = sort_order;
    persist_config(app);
}

fn apply_theme(app: &mut App, theme: Theme) {
    app.theme = theme;

    if let Some(hex) = Theme::to_hex(theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    app.config.theme = theme.name.to_string();
    persist_config(app);
}

/// Writes the library to disk, reporting a failure in the status line.
///
/// The in-memory library stays as it is when the save fails, the next
/// successful save writes everything.
fn persist_library(app: &mut App) {
    if let Err(e) = app.store.save(&app.library) {
        error!(path = %app.store.path().display(), "failed to save library: {e}");
        app.status = format!("Could not save library: {e}");
    }
}

fn persist_config(app: &mut App) {
    if let Err(e) = save_config(&app.config) {
        error!("failed to save configuration: {e}");
        app.status = format!("Could not save settings: {e}");
    }
}
