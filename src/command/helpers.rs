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

//! Helpers for writing CLIs.

use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context as _, Result};
use thiserror::Error;

use crate::{
    config::{ConfigStore, ConfigUpdate},
    storage::FileStorage,
};

/// Errors that can occur when persisting a change.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configuration could not be saved.
    #[error("Failed to save the configuration")]
    SaveFailed,
}

/// Where to read the content of a template from.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct ContentSource {
    /// The content of the template.
    #[arg(long, short = 'c')]
    content: Option<String>,
    /// A file containing the content of the template.
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,
}

impl ContentSource {
    /// Returns the content given on the command line, if any.
    pub fn read(&self) -> Result<Option<String>> {
        match (&self.content, &self.file) {
            (Some(content), _) => Ok(Some(content.clone())),
            (None, Some(file)) => Ok(Some(
                fs::read_to_string(file).wrap_err_with(|| {
                    format!("Failed to read {}", file.display())
                })?,
            )),
            (None, None) => Ok(None),
        }
    }
}

/// Opens the configuration store of the current repository.
pub fn open_store() -> Result<ConfigStore<FileStorage>> {
    let storage = FileStorage::open_default()
        .wrap_err("Failed to locate the data directory")?;
    Ok(ConfigStore::new(storage))
}

/// Applies an update to the configuration, failing if it cannot be saved.
pub fn apply(
    store: &ConfigStore<FileStorage>,
    update: ConfigUpdate,
) -> Result<(), StoreError> {
    ensure_saved(store.update(update))
}

/// Turns the outcome of a store operation into a result.
pub const fn ensure_saved(saved: bool) -> Result<(), StoreError> {
    if saved {
        Ok(())
    } else {
        Err(StoreError::SaveFailed)
    }
}

/// Uncapitalises the first character in s.
pub fn uncapitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Prints a success.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        let message = format!($($arg)*).green().bold();
        println!("{message}");
    }};
}

/// Prints a warning.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        let message = format!($($arg)*).yellow().bold();
        eprintln!("{message}");
    }};
}

/// Prints an error.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        let message = format!($($arg)*);
        let message = $crate::command::helpers::uncapitalise(&message);
        let message = format!("Error: {message}").red().bold();
        eprintln!("{message}");
    }};
}

/// Prints a hint.
#[macro_export]
macro_rules! hint {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        let message = format!($($arg)*).blue();
        eprintln!("{message}");
    }};
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;

    #[test]
    fn uncapitalise_lowers_the_first_character_only() {
        assert_eq!(uncapitalise("Failed to Save"), "failed to Save");
        assert_eq!(uncapitalise(""), "");
    }

    #[test]
    fn ensure_saved_maps_failures() {
        assert!(ensure_saved(true).is_ok());
        assert!(matches!(ensure_saved(false), Err(StoreError::SaveFailed)));
    }
}
