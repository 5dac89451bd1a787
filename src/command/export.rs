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

//! The `export` subcommand.

use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

use super::helpers::open_store;
use crate::success;

/// The export command.
#[derive(Debug, Parser)]
pub struct Export {
    /// The directory in which to write the export file.
    #[arg(long, short = 'o', default_value = ".", conflicts_with = "stdout")]
    output: PathBuf,
    /// Print the configuration instead of writing a file.
    #[arg(long)]
    stdout: bool,
}

impl super::Command for Export {
    fn run(&self) -> Result<()> {
        let store = open_store()?;

        if self.stdout {
            println!("{}", store.export());
        } else {
            let path = store.export_to_file(&self.output)?;
            success!("The configuration has been exported to {}.", path.display());
        }

        Ok(())
    }
}
