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

//! The `separator` subcommand.

use clap::Parser;
use eyre::Result;

use super::helpers::{apply, open_store};
use crate::{config::ConfigUpdate, success};

/// The separator command.
#[derive(Debug, Parser)]
pub struct Separator {
    /// The new separator between the prefix and the description.
    separator: Option<String>,
}

impl super::Command for Separator {
    fn run(&self) -> Result<()> {
        let store = open_store()?;
        let mut conventions = store.get().branch_conventions;

        if let Some(separator) = &self.separator {
            conventions.set_separator(separator);
            apply(&store, ConfigUpdate::BranchConventions(conventions))?;
            success!("The separator has been updated.");
        } else {
            println!("{}", conventions.separator());
        }

        Ok(())
    }
}
