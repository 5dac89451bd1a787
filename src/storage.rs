// git-conventions - A Git extension to manage branch naming and PR templates.
// Copyright (C) 2024 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Key-value persistence for the configuration blob.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs, io,
    path::PathBuf,
    process::Command,
};

use thiserror::Error;

use crate::tracing::LogResult as _;

/// A key-value store holding serialised documents.
pub trait Storage {
    /// Gets the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, ReadError>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), WriteError>;
}

/// Errors that can occur when reading from a storage.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The value exists but cannot be read.
    #[error("Failed to read {path}")]
    Io {
        /// The path of the value.
        path: PathBuf,
        /// The OS error.
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur when writing to a storage.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The data directory cannot be created.
    #[error("Failed to create the data directory {path}")]
    CreateDir {
        /// The path of the directory.
        path: PathBuf,
        /// The OS error.
        #[source]
        source: io::Error,
    },
    /// The value cannot be written.
    #[error("Failed to write {path}")]
    Io {
        /// The path of the value.
        path: PathBuf,
        /// The OS error.
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur when resolving the default data directory.
#[derive(Debug, Error)]
pub enum DataDirError {
    /// The `git` command cannot be run.
    #[error("Failed to run the git command")]
    CannotRunGit(#[source] io::Error),
    /// Git has returned an error.
    #[error("{0}")]
    GitError(String),
    /// The output of the git command is not proper UTF-8.
    #[error("The output of the git command is not proper UTF-8")]
    EncodingError(#[source] std::string::FromUtf8Error),
}

/// The environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "GIT_CONVENTIONS_DIR";

/// The name of the data directory inside the Git directory.
const DATA_DIR_NAME: &str = "git-conventions";

/// A storage keeping each value in a JSON file of a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// The directory holding the files.
    dir: PathBuf,
}

impl FileStorage {
    /// Builds a file storage rooted in `dir`.
    ///
    /// The directory is created on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Builds a file storage in the default data directory.
    ///
    /// The directory is taken from `GIT_CONVENTIONS_DIR` when set, otherwise
    /// it is `git-conventions` inside the Git directory of the current repo.
    #[tracing::instrument(name = "open_file_storage", level = "trace")]
    pub fn open_default() -> Result<Self, DataDirError> {
        let dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => git_dir()?.join(DATA_DIR_NAME),
        };

        tracing::debug!(?dir, "using the file storage");
        Ok(Self::new(dir))
    }

    /// Returns the path of the file holding `key`.
    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    #[tracing::instrument(name = "file_storage_get", level = "trace", skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, ReadError> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(?path, "no stored value");
                Ok(None)
            }
            Err(source) => Err(ReadError::Io { path, source }).log_err(),
        }
    }

    #[tracing::instrument(
        name = "file_storage_set",
        level = "trace",
        skip(self, value)
    )]
    fn set(&self, key: &str, value: &str) -> Result<(), WriteError> {
        fs::create_dir_all(&self.dir)
            .map_err(|source| WriteError::CreateDir {
                path: self.dir.clone(),
                source,
            })
            .log_err()?;

        let path = self.path(key);
        fs::write(&path, value)
            .map_err(|source| WriteError::Io { path, source })
            .log_err()
    }
}

/// An in-memory storage, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    /// The stored values.
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Builds an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ReadError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WriteError> {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Returns the path of the Git directory.
#[tracing::instrument(level = "trace")]
fn git_dir() -> Result<PathBuf, DataDirError> {
    let git_rev_parse = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map_err(DataDirError::CannotRunGit)
        .log_err()?;

    if git_rev_parse.status.success() {
        Ok(String::from_utf8(git_rev_parse.stdout)
            .map_err(DataDirError::EncodingError)
            .log_err()?
            .trim()
            .into())
    } else {
        Err(DataDirError::GitError(
            String::from_utf8(git_rev_parse.stderr)
                .map_err(DataDirError::EncodingError)
                .log_err()?
                .trim()
                .to_owned(),
        ))
        .log_err()
    }
}
