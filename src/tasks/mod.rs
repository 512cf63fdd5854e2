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

//! Asynchronous application task processing.
//!
//! This module offloads blocking network calls from the main UI thread. It
//! provides a dedicated worker loop that owns the catalog client, translates
//! [`AppTask`] requests into catalog calls, and broadcasts the results back
//! to the application via [`AppEvent`]s.
//!
//! Every task carries the [`RequestToken`] it was registered under, and the
//! reply carries it back unchanged. The worker never decides whether a reply
//! is still wanted, that is up to the UI thread.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::{debug, warn};

use crate::{
    catalog::{Credentials, SpotifyClient},
    events::AppEvent,
    model::requests::RequestToken,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    Search {
        token: RequestToken,
        query: String,
        offset: u32,
    },

    FetchArtwork {
        token: RequestToken,
        url: String,
    },
}

/// Spawns a background thread to process application tasks.
///
/// The worker runs until every task sender has been dropped.
///
/// # Arguments
///
/// * `credentials` - The catalog client credentials.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    credentials: Credentials,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let mut client = SpotifyClient::new(credentials);

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                event_tx: &event_tx,
                client: &mut client,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                // The UI has gone away, nothing left to report to
                debug!("task worker stopping: {e}");
                break;
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
    client: &'a mut SpotifyClient,
}

/// Orchestrates the execution of a single task.
///
/// Catalog failures are delivered to the UI as events; only a closed event
/// channel is returned as an error.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::Search { token, query, offset } => search(ctx, token, &query, offset),
        AppTask::FetchArtwork { token, url } => fetch_artwork(ctx, token, &url),
    }
}

fn search(ctx: &mut TaskContext, token: RequestToken, query: &str, offset: u32) -> Result<()> {
    let event = match ctx.client.search_albums(query, offset) {
        Ok(page) => AppEvent::SearchResultsReady { token, page },
        Err(e) => {
            warn!(query, offset, "search failed: {e}");
            AppEvent::SearchFailed {
                token,
                message: e.to_string(),
            }
        }
    };

    ctx.event_tx.send(event)?;

    Ok(())
}

fn fetch_artwork(ctx: &mut TaskContext, token: RequestToken, url: &str) -> Result<()> {
    let artwork = match ctx.client.fetch_artwork(url) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            debug!(url, "artwork download failed: {e}");
            None
        }
    };

    ctx.event_tx.send(AppEvent::ArtworkReady { token, artwork })?;

    Ok(())
}
