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

//! The `import` subcommand.

use std::{fs, path::PathBuf};

use clap::Parser;
use eyre::{Context as _, Result, bail};
use thiserror::Error;

use super::helpers::open_store;
use crate::success;

/// The import command.
#[derive(Debug, Parser)]
pub struct Import {
    /// The file to import.
    file: PathBuf,
}

/// Errors that can occur when importing a configuration.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file cannot be imported.
    #[error("Failed to import {0}: invalid format")]
    InvalidFormat(String),
}

impl super::Command for Import {
    fn run(&self) -> Result<()> {
        let store = open_store()?;

        let text = fs::read_to_string(&self.file).wrap_err_with(|| {
            format!("Failed to read {}", self.file.display())
        })?;

        if !store.import_from_text(&text) {
            bail!(ImportError::InvalidFormat(
                self.file.display().to_string()
            ));
        }

        success!("The configuration has been imported.");
        Ok(())
    }
}
