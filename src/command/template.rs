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

//! The `template` subcommand.

use clap::{Parser, Subcommand};
use colored::Colorize as _;
use eyre::{Result, bail};
use inquire::{Confirm, Editor};
use thiserror::Error;

use super::helpers::{ContentSource, ensure_saved, open_store};
use crate::{
    hint, success,
    storage::Storage,
    template::TemplateEngine,
};

/// The template command.
#[derive(Debug, Subcommand)]
pub enum Template {
    /// Lists the templates.
    List,
    /// Adds a new template.
    Add(Add),
    /// Edits an existing template.
    Edit(Edit),
    /// Removes a template.
    Remove(Remove),
    /// Prints the raw content of a template.
    Show(TemplateId),
    /// Prints the HTML preview of a template.
    Preview(TemplateId),
}

/// Arguments for `template add`.
#[derive(Debug, Parser)]
pub struct Add {
    /// The name of the template.
    name: String,
    /// The content, opened in an editor when not given.
    #[command(flatten)]
    content: ContentSource,
}

/// Arguments for `template edit`.
#[derive(Debug, Parser)]
pub struct Edit {
    /// The identifier of the template.
    id: String,
    /// The new name of the template.
    #[arg(long, short = 'n')]
    name: Option<String>,
    /// The new content, edited from the current one when not given.
    #[command(flatten)]
    content: ContentSource,
}

/// Arguments for `template remove`.
#[derive(Debug, Parser)]
pub struct Remove {
    /// The identifier of the template.
    id: String,
    /// Do not ask for confirmation.
    #[arg(long, short = 'y')]
    yes: bool,
}

/// A template identifier.
#[derive(Debug, Parser)]
pub struct TemplateId {
    /// The identifier of the template.
    id: String,
}

/// Usage errors of `git conventions template`.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// There is no template with the given identifier.
    #[error("There is no template with the identifier {0}")]
    NotFound(String),
    /// The template name is blank.
    #[error("The template name cannot be empty")]
    EmptyName,
    /// The template content is blank.
    #[error("The template content cannot be empty")]
    EmptyContent,
}

impl super::Command for Template {
    fn run(&self) -> Result<()> {
        let store = open_store()?;
        let engine = TemplateEngine::new(&store);

        match self {
            Self::List => list(&engine),

            Self::Add(Add { name, content }) => {
                let content = match content.read()? {
                    Some(content) => content,
                    None => ask_content("")?,
                };

                let (name, content) = validate(name, &content)?;
                ensure_saved(engine.add(name, content))?;

                let id = engine
                    .list()
                    .last()
                    .map(|template| template.id.clone())
                    .unwrap_or_default();
                success!("The template {name} has been added with the id {id}.");
            }

            Self::Edit(Edit { id, name, content }) => {
                let Some(template) = engine.get_by_id(id) else {
                    bail!(TemplateError::NotFound(id.clone()));
                };

                let name = name.as_deref().unwrap_or(&template.name);
                let content = match content.read()? {
                    Some(content) => content,
                    None => ask_content(&template.content)?,
                };

                let (name, content) = validate(name, &content)?;
                ensure_saved(engine.update(id, name, content))?;
                success!("The template {name} has been updated.");
            }

            Self::Remove(Remove { id, yes }) => {
                let Some(template) = engine.get_by_id(id) else {
                    bail!(TemplateError::NotFound(id.clone()));
                };

                let confirmed = *yes
                    || Confirm::new(&format!(
                        "Are you sure you want to delete the template {}?",
                        template.name
                    ))
                    .with_default(false)
                    .prompt()?;

                if confirmed {
                    ensure_saved(engine.remove(id))?;
                    success!("The template {} has been removed.", template.name);
                }
            }

            Self::Show(TemplateId { id }) => {
                let Some(template) = engine.get_by_id(id) else {
                    bail!(TemplateError::NotFound(id.clone()));
                };

                println!("{}", template.content);
            }

            Self::Preview(TemplateId { id }) => {
                let Some(template) = engine.get_by_id(id) else {
                    bail!(TemplateError::NotFound(id.clone()));
                };

                println!("{}", engine.render(template.content.as_str()));
            }
        }

        Ok(())
    }
}

/// Prints the list of templates.
fn list<S: Storage>(engine: &TemplateEngine<'_, S>) {
    let templates = engine.list();

    if templates.is_empty() {
        hint!("There is no template yet.");
        hint!("You can add one with `git conventions template add <NAME>`.");
    }

    for template in templates {
        println!("{}  {}", template.id.dimmed(), template.name.bold());
        println!("    {}", template.excerpt().replace('\n', " "));
    }
}

/// Opens an editor to write the content of a template.
fn ask_content(initial: &str) -> Result<String> {
    Ok(Editor::new("Template content")
        .with_predefined_text(initial)
        .with_file_extension(".md")
        .prompt()?)
}

/// Trims the name and content of a template and ensures none is blank.
fn validate<'a>(
    name: &'a str,
    content: &'a str,
) -> Result<(&'a str, &'a str), TemplateError> {
    let name = name.trim();
    let content = content.trim();

    if name.is_empty() {
        Err(TemplateError::EmptyName)
    } else if content.is_empty() {
        Err(TemplateError::EmptyContent)
    } else {
        Ok((name, content))
    }
}
