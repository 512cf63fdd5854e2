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

//! Application configuration.
//!
//! This module manages the application configuration file: catalog
//! credentials, the selected theme and the last used library sort order.

use std::env;

use serde::{Deserialize, Serialize};

use crate::{catalog::Credentials, model::SortOrder};

const CONFIG_NAME: &str = "album-collector";

const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) theme: String,
    pub(crate) sort_order: SortOrder,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            client_id: String::new(),
            client_secret: String::new(),
            theme: String::new(),
            sort_order: SortOrder::default(),
        }
    }
}

impl AppConfig {
    /// Catalog credentials, with the environment taking precedence over the
    /// configuration file.
    pub(crate) fn credentials(&self) -> Credentials {
        self.credentials_with(|name| env::var(name).ok())
    }

    fn credentials_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Credentials {
        let pick = |name: &str, configured: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| configured.to_string())
        };

        Credentials {
            client_id: pick(CLIENT_ID_VAR, &self.client_id),
            client_secret: pick(CLIENT_SECRET_VAR, &self.client_secret),
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub(crate) fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}
