//! A file backed store for the nutrition dataset.
//!
//! The [`DataStore`] owns the path to a single JSON document holding the
//! whole [`Dataset`]. Loading never fails from the caller's point of view:
//! a missing or unreadable file degrades to the seeded defaults. Saving
//! replaces the file in one step and reports failures.

use std::{ffi::OsString, fs, io, path::{Path, PathBuf}};

use tracing::warn;

use crate::domain::Dataset;

/// Error returned when the dataset cannot be persisted.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The dataset could not be serialized.
    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The data file could not be written or replaced.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Load and save the dataset to a single JSON file.
///
/// The path is supplied at construction; there is no global default inside
/// the library.
#[derive(Debug, Clone)]
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the dataset, falling back to the seeded defaults.
    ///
    /// A missing file and an unreadable or unparseable one are deliberately
    /// not distinguished: both return [`Dataset::default`]. The corrupt-file
    /// case is logged as a warning so the operator can recover the file
    /// manually, but calling code only ever sees a usable dataset.
    #[must_use]
    pub fn load(&self) -> Dataset {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), %error, "could not read data file, using defaults");
                }
                return Dataset::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(dataset) => dataset,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "could not parse data file, using defaults");
                Dataset::default()
            }
        }
    }

    /// Saves the whole dataset, replacing the backing file.
    ///
    /// The document is written to a sibling temporary file and renamed into
    /// place, so a subsequent [`load`](Self::load) never observes a
    /// half-written file. The in-memory dataset remains valid whether or
    /// not the save succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization fails or the file cannot be
    /// written or renamed.
    pub fn save(&self, dataset: &Dataset) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(dataset)?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|source| StoreError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
