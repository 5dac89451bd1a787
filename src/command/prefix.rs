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

//! The `prefix` subcommand.

use clap::{Parser, Subcommand};
use eyre::Result;

use super::helpers::{apply, open_store};
use crate::{config::ConfigUpdate, hint, success, warning};

/// The prefix command.
#[derive(Debug, Subcommand)]
pub enum Prefix {
    /// Lists the prefixes.
    List,
    /// Adds a prefix at the end of the list.
    Add(PrefixArg),
    /// Removes a prefix.
    Remove(PrefixArg),
}

/// A prefix argument.
#[derive(Debug, Parser)]
pub struct PrefixArg {
    /// The branch prefix.
    prefix: String,
}

impl super::Command for Prefix {
    fn run(&self) -> Result<()> {
        let store = open_store()?;
        let mut conventions = store.get().branch_conventions;

        match self {
            Self::List => {
                if conventions.prefixes().is_empty() {
                    hint!("No branch prefix is configured.");
                }

                for prefix in conventions.prefixes() {
                    println!("{prefix}");
                }
            }

            Self::Add(PrefixArg { prefix }) => {
                conventions.add_prefix(prefix)?;
                apply(&store, ConfigUpdate::BranchConventions(conventions))?;
                success!("The prefix {} has been added.", prefix.trim());
            }

            Self::Remove(PrefixArg { prefix }) => {
                if conventions.remove_prefix(prefix) {
                    apply(
                        &store,
                        ConfigUpdate::BranchConventions(conventions),
                    )?;
                    success!("The prefix {prefix} has been removed.");
                } else {
                    warning!("There is no prefix {prefix}.");
                }
            }
        }

        Ok(())
    }
}
