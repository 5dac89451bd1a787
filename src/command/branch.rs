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

//! The `branch` subcommand.

use std::process::Command;

use clap::Parser;
use eyre::{Result, bail};
use thiserror::Error;

use super::helpers::open_store;
use crate::success;

/// The branch command.
#[derive(Debug, Parser)]
pub struct Branch {
    /// The prefix to use instead of the first configured one.
    #[arg(long, short = 'p')]
    prefix: Option<String>,
    /// Create and switch to the branch with `git switch -c`.
    #[arg(long)]
    create: bool,
    /// A free-text description of the branch.
    #[arg(required = true, num_args = 1..)]
    description: Vec<String>,
}

/// Errors that can occur when creating the branch.
#[derive(Debug, Error)]
pub enum BranchError {
    /// Git has returned an error.
    #[error("Git has returned an error")]
    Git {
        /// The status code returned by Git.
        status_code: Option<i32>,
    },
}

impl super::Command for Branch {
    fn run(&self) -> Result<()> {
        let store = open_store()?;
        let conventions = store.get().branch_conventions;

        let description = self.description.join(" ");
        let branch_name =
            conventions.branch_name(&description, self.prefix.as_deref())?;

        if self.create {
            let mut git_switch = Command::new("git");
            git_switch.args(["switch", "-c", &branch_name]);

            tracing::info!(?git_switch, "creating the branch");

            let status = git_switch.status()?;
            if !status.success() {
                bail!(BranchError::Git {
                    status_code: status.code()
                });
            }

            success!("Switched to the new branch {branch_name}.");
        } else {
            println!("{branch_name}");
        }

        Ok(())
    }
}
