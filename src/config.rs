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

//! Configuration for git-conventions.
//!
//! The whole configuration is persisted as a single JSON document under
//! [`STORAGE_KEY`]. Reads never fail: an absent or unusable document yields
//! the default configuration. Writes report their outcome as a boolean.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::{
    branch::BranchConventions,
    storage::{Storage, WriteError},
    template::Template,
    tracing::LogResult as _,
};

/// The key of the configuration document in the storage.
pub const STORAGE_KEY: &str = "github_convention_manager";

/// The name of the file produced by an export.
pub const EXPORT_FILE_NAME: &str = "github-conventions-config.json";

/// The git-conventions configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// The URL of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub repository_url: String,
    /// The branch naming conventions.
    #[serde(deserialize_with = "null_as_default")]
    pub branch_conventions: BranchConventions,
    /// The pull request templates.
    #[serde(deserialize_with = "null_as_default")]
    pub templates: Vec<Template>,
}

/// A replacement of one top-level field of the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigUpdate {
    /// Replaces the repository URL.
    RepositoryUrl(String),
    /// Replaces the branch conventions.
    BranchConventions(BranchConventions),
    /// Replaces the template list.
    Templates(Vec<Template>),
}

/// Errors that can occur when saving the configuration.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The configuration cannot be serialised.
    #[error("Failed to serialise the configuration")]
    Serialise(#[source] serde_json::Error),
    /// The storage has rejected the write.
    #[error("Failed to write the configuration")]
    Write(#[from] WriteError),
}

/// Errors that can occur when exporting the configuration to a file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export file cannot be written.
    #[error("Failed to write {path}")]
    Write {
        /// The path of the export file.
        path: PathBuf,
        /// The OS error.
        #[source]
        source: io::Error,
    },
}

impl Configuration {
    /// Returns a copy of the configuration with one field replaced.
    #[must_use]
    pub fn with(self, update: ConfigUpdate) -> Self {
        match update {
            ConfigUpdate::RepositoryUrl(repository_url) => Self {
                repository_url,
                ..self
            },
            ConfigUpdate::BranchConventions(branch_conventions) => Self {
                branch_conventions,
                ..self
            },
            ConfigUpdate::Templates(templates) => Self { templates, ..self },
        }
    }
}

/// Deserialises a field, using its default value when it is `null`.
pub(crate) fn null_as_default<'de, D, T>(
    deserializer: D,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The store owning the persisted configuration.
#[derive(Debug)]
pub struct ConfigStore<S> {
    /// The persistence medium.
    storage: S,
}

impl<S: Storage> ConfigStore<S> {
    /// Builds a configuration store on top of `storage`.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Gets the current configuration.
    ///
    /// Falls back to the default configuration when nothing has been saved
    /// yet, or when the saved document cannot be read or parsed.
    #[tracing::instrument(name = "get_config", level = "trace", skip_all)]
    pub fn get(&self) -> Configuration {
        let Ok(stored) = self.storage.get(STORAGE_KEY) else {
            tracing::warn!("cannot read the configuration, using the default");
            return Configuration::default();
        };

        let Some(stored) = stored else {
            tracing::debug!("no configuration saved, using the default");
            return Configuration::default();
        };

        serde_json::from_str(&stored).unwrap_or_else(|error| {
            tracing::warn!(
                ?error,
                "invalid saved configuration, using the default"
            );
            Configuration::default()
        })
    }

    /// Saves the configuration, overwriting the previous one.
    ///
    /// Returns `false` if the configuration could not be persisted.
    #[tracing::instrument(name = "save_config", level = "trace", skip_all)]
    pub fn save(&self, config: &Configuration) -> bool {
        tracing::debug!(?config, "saving the configuration");
        serde_json::to_string(config)
            .map_err(SaveError::Serialise)
            .log_err()
            .and_then(|document| self.save_document(&document))
            .is_ok()
    }

    /// Replaces one field of the saved configuration.
    ///
    /// This is a read-modify-write of the whole document: the last write
    /// wins.
    #[tracing::instrument(name = "update_config", level = "trace", skip(self))]
    pub fn update(&self, update: ConfigUpdate) -> bool {
        self.save(&self.get().with(update))
    }

    /// Exports the current configuration as indented JSON.
    #[expect(
        clippy::missing_panics_doc,
        clippy::expect_used,
        reason = "The configuration only contains strings, sequences and maps \
            with string keys, so it can always be serialised."
    )]
    pub fn export(&self) -> String {
        serde_json::to_string_pretty(&self.get())
            .expect("Failed to serialise the configuration")
    }

    /// Exports the current configuration to [`EXPORT_FILE_NAME`] in `dir`.
    #[tracing::instrument(name = "export_config", level = "trace", skip(self))]
    pub fn export_to_file(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(EXPORT_FILE_NAME);
        fs::write(&path, format!("{}\n", self.export()))
            .map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })
            .log_err()?;

        tracing::info!(?path, "configuration exported");
        Ok(path)
    }

    /// Imports a configuration from its JSON representation.
    ///
    /// The document is saved as is, without any validation against the
    /// configuration structure. Returns `false` and leaves the saved
    /// configuration untouched when `text` is not valid JSON.
    #[tracing::instrument(name = "import_config", level = "trace", skip_all)]
    pub fn import_from_text(&self, text: &str) -> bool {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(document) => self.save_document(&document.to_string()).is_ok(),
            Err(error) => {
                tracing::warn!(?error, "cannot import the configuration");
                false
            }
        }
    }

    /// Writes a serialised document to the storage.
    fn save_document(&self, document: &str) -> Result<(), SaveError> {
        self.storage
            .set(STORAGE_KEY, document)
            .map_err(SaveError::Write)
            .log_err()
    }
}
