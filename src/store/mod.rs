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

//! Library persistence.
//!
//! The whole library lives in a single binary file (see [`codec`] for the
//! layout) which is read once at startup and rewritten in full after every
//! change. There is no journal and no atomic replace: a crash part way
//! through a write can leave a damaged file, which the next load detects
//! from its header or length and reports as [`StoreError::CorruptFile`].

pub(crate) mod codec;

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{info, warn};

use crate::model::{Library, SortOrder};

const LIBRARY_FILE: &str = "library.dat";

const BACKUP_SUFFIX: &str = ".bak";

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("library file is corrupt")]
    CorruptFile,

    #[error("library file version {0} is not supported")]
    UnsupportedVersion(u32),

    #[error("library is too large to store")]
    TooLarge,

    #[error("library file I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Per-user application directories.
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "AlbumCollector")
}

pub(crate) struct LibraryStore {
    path: PathBuf,
    /// Set when the file on disk could not be loaded and has not been
    /// replaced yet.
    unreadable: bool,
}

impl LibraryStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            unreadable: false,
        }
    }

    /// The store at the standard per-user location, falling back to the
    /// working directory on platforms without one.
    pub(crate) fn default_location() -> Self {
        let dir = project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_default();
        Self::new(dir.join(LIBRARY_FILE))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable library file is moved before it is first
    /// overwritten.
    pub(crate) fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Loads the library, sorted under `sort_order`.
    ///
    /// A missing file is not an error, it just means nothing has been saved
    /// yet. Any other failure leaves the file marked unreadable: it is kept
    /// as it is until [`save`](Self::save) has a change to write, and then
    /// copied to [`backup_path`](Self::backup_path) first.
    pub(crate) fn load(&mut self, sort_order: SortOrder) -> Result<Library, StoreError> {
        let result = self.read(sort_order);
        self.unreadable = result.is_err();
        result
    }

    fn read(&self, sort_order: SortOrder) -> Result<Library, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no library file, starting empty");
                return Ok(Library::new(sort_order));
            }
            Err(e) => return Err(e.into()),
        };

        let decoded = codec::decode(&mut BufReader::new(file))?;
        if decoded.duplicates > 0 {
            warn!(count = decoded.duplicates, "skipped duplicate library entries");
        }

        let mut library = decoded.library;
        library.set_sort_order(sort_order);

        info!(
            path = %self.path.display(),
            version = decoded.version,
            albums = library.len(),
            "loaded library"
        );

        Ok(library)
    }

    /// Rewrites the library file with the library's current contents.
    ///
    /// A file that failed to load is backed up before the first rewrite. If
    /// the backup cannot be made the file is left alone and the error
    /// returned.
    pub(crate) fn save(&mut self, library: &Library) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        if self.unreadable {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup)?;
            warn!(
                path = %self.path.display(),
                backup = %backup.display(),
                "kept a copy of the unreadable library file"
            );
            self.unreadable = false;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        codec::encode(library, &mut writer)?;
        writer.flush()?;

        info!(path = %self.path.display(), albums = library.len(), "saved library");

        Ok(())
    }

    /// The final save at shutdown.
    ///
    /// A file that failed to load and was never replaced during the session
    /// is left untouched, nothing in it has been superseded.
    pub(crate) fn save_on_exit(&mut self, library: &Library) -> Result<(), StoreError> {
        if self.unreadable {
            info!(path = %self.path.display(), "leaving unreadable library file untouched");
            return Ok(());
        }

        self.save(library)
    }
}
