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

//! The `repo` subcommand.

use clap::Parser;
use eyre::Result;

use super::helpers::{apply, open_store};
use crate::{config::ConfigUpdate, hint, success};

/// The repo command.
#[derive(Debug, Parser)]
pub struct Repo {
    /// The new repository URL.
    url: Option<String>,
}

impl super::Command for Repo {
    fn run(&self) -> Result<()> {
        let store = open_store()?;

        match &self.url {
            Some(url) => {
                let url = url.trim().to_owned();
                apply(&store, ConfigUpdate::RepositoryUrl(url))?;
                success!("The repository URL has been updated.");
            }

            None => {
                let url = store.get().repository_url;
                if url.is_empty() {
                    hint!("No repository URL is configured.");
                } else {
                    println!("{url}");
                }
            }
        }

        Ok(())
    }
}
