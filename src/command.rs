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

mod branch;
mod export;
pub mod helpers;
mod import;
mod prefix;
mod repo;
mod separator;
mod template;

use clap::Parser;
use eyre::Result;

use self::{
    branch::Branch,
    export::Export,
    helpers::StoreError,
    import::{Import, ImportError},
    prefix::Prefix,
    repo::Repo,
    separator::Separator,
    template::{Template, TemplateError},
};
use crate::{
    branch::{BranchNameError, PrefixError},
    error, hint,
    tracing::LOG_ENV,
};

/// Manage branch naming conventions and pull request templates.
#[derive(Debug, Parser)]
#[command(author, version)]
pub enum GitConventions {
    /// Shows or sets the repository URL.
    Repo(Repo),
    /// Manages the branch prefixes.
    #[command(subcommand)]
    Prefix(Prefix),
    /// Shows or sets the branch separator.
    Separator(Separator),
    /// Builds a branch name from a description.
    Branch(Branch),
    /// Manages the pull request templates.
    #[command(subcommand)]
    Template(Template),
    /// Exports the configuration to a file.
    Export(Export),
    /// Imports the configuration from a file.
    Import(Import),
}

trait Command {
    /// Runs the command.
    fn run(&self) -> Result<()>;
}

impl GitConventions {
    /// Runs git-conventions.
    pub fn run() -> Result<()> {
        crate::tracing::init();

        let command = Self::parse();
        tracing::debug!(?command, "running");

        let result = match command {
            Self::Repo(repo) => repo.run(),
            Self::Prefix(prefix) => prefix.run(),
            Self::Separator(separator) => separator.run(),
            Self::Branch(branch) => branch.run(),
            Self::Template(template) => template.run(),
            Self::Export(export) => export.run(),
            Self::Import(import) => import.run(),
        };

        match result {
            Err(e) => handle_errors(e),
            Ok(()) => Ok(()),
        }
    }
}

fn handle_errors(e: color_eyre::Report) -> Result<()> {
    if let Some(e) = e.downcast_ref::<PrefixError>() {
        error!("{e}");
        match e {
            PrefixError::Empty => (),
            PrefixError::Duplicate(_) => {
                hint!("You can list the prefixes with `git conventions prefix list`.");
            }
        }
        std::process::exit(exitcode::USAGE);
    } else if let Some(e) = e.downcast_ref::<BranchNameError>() {
        error!("{e}");
        match e {
            BranchNameError::NoPrefix => {
                hint!("You can add one with `git conventions prefix add <PREFIX>`.");
            }
            BranchNameError::UnknownPrefix(_) => {
                hint!("You can list the prefixes with `git conventions prefix list`.");
            }
            BranchNameError::EmptyDescription => (),
        }
        std::process::exit(exitcode::USAGE);
    } else if let Some(e) = e.downcast_ref::<TemplateError>() {
        error!("{e}");
        match e {
            TemplateError::NotFound(_) => {
                hint!("You can list the templates with `git conventions template list`.");
            }
            TemplateError::EmptyName | TemplateError::EmptyContent => (),
        }
        std::process::exit(exitcode::USAGE);
    } else if let Some(e) = e.downcast_ref::<ImportError>() {
        error!("{e}");
        hint!("The file must contain a configuration exported as JSON.");
        std::process::exit(exitcode::DATAERR);
    } else if let Some(e) = e.downcast_ref::<StoreError>() {
        error!("{e}");
        hint!("You can get more details by setting {LOG_ENV}=debug.");
        std::process::exit(exitcode::IOERR);
    } else {
        Err(e)
    }
}
