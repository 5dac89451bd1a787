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

//! Pull request templates.

mod render;

pub use render::render;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    config::{ConfigStore, ConfigUpdate, null_as_default},
    storage::Storage,
};

/// The number of characters shown in a template excerpt.
const EXCERPT_LEN: usize = 100;

/// A pull request template.
///
/// Fields missing from an imported template are left empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Template {
    /// The unique identifier of the template.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// The name of the template.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// The raw content of the template.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// The creation date, as an ISO 8601 timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl Template {
    /// Builds a new template with a fresh identifier and creation date.
    pub fn new(name: &str, content: &str) -> Self {
        Self {
            id: generate_id(),
            name: name.to_owned(),
            content: content.to_owned(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Returns the beginning of the content, for listings.
    pub fn excerpt(&self) -> String {
        let mut chars = self.content.chars();
        let excerpt: String = chars.by_ref().take(EXCERPT_LEN).collect();

        if chars.next().is_some() {
            format!("{excerpt}...")
        } else {
            excerpt
        }
    }
}

/// Template management on top of the configuration store.
#[derive(Debug)]
pub struct TemplateEngine<'store, S> {
    /// The store holding the templates.
    store: &'store ConfigStore<S>,
}

impl<'store, S: Storage> TemplateEngine<'store, S> {
    /// Builds a template engine using `store` for persistence.
    pub const fn new(store: &'store ConfigStore<S>) -> Self {
        Self { store }
    }

    /// Lists the templates, in creation order.
    pub fn list(&self) -> Vec<Template> {
        self.store.get().templates
    }

    /// Adds a new template at the end of the list.
    #[tracing::instrument(name = "add_template", level = "trace", skip(self))]
    pub fn add(&self, name: &str, content: &str) -> bool {
        let template = Template::new(name, content);
        tracing::debug!(id = %template.id, "adding a template");

        let mut templates = self.list();
        templates.push(template);
        self.save(templates)
    }

    /// Updates the name and content of a template.
    ///
    /// Updating an unknown template is a successful no-op.
    #[tracing::instrument(name = "update_template", level = "trace", skip(self))]
    pub fn update(&self, id: &str, name: &str, content: &str) -> bool {
        let templates = self
            .list()
            .into_iter()
            .map(|template| {
                if template.id == id {
                    Template {
                        name: name.to_owned(),
                        content: content.to_owned(),
                        ..template
                    }
                } else {
                    template
                }
            })
            .collect();

        self.save(templates)
    }

    /// Removes a template.
    ///
    /// Removing an unknown template is a successful no-op.
    #[tracing::instrument(name = "remove_template", level = "trace", skip(self))]
    pub fn remove(&self, id: &str) -> bool {
        let mut templates = self.list();
        templates.retain(|template| template.id != id);
        self.save(templates)
    }

    /// Gets a template by its identifier.
    pub fn get_by_id(&self, id: &str) -> Option<Template> {
        self.list().into_iter().find(|template| template.id == id)
    }

    /// Renders template content to HTML for previewing.
    pub fn render<'content>(
        &self,
        content: impl Into<Option<&'content str>>,
    ) -> String {
        render(content)
    }

    /// Saves the template list.
    fn save(&self, templates: Vec<Template>) -> bool {
        self.store.update(ConfigUpdate::Templates(templates))
    }
}

/// Generates a template identifier.
///
/// The identifier is made of the current time in milliseconds followed by a
/// random number, both in base 36.
fn generate_id() -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let random = rand::random::<u64>();
    format!("{}{}", to_base36(millis), to_base36(random))
}

/// Formats a number in base 36.
fn to_base36(mut value: u64) -> String {
    let mut digits = Vec::new();

    loop {
        let digit = u32::try_from(value % 36).unwrap_or_default();
        digits.push(char::from_digit(digit, 36).unwrap_or('0'));
        value /= 36;

        if value == 0 {
            break;
        }
    }

    digits.iter().rev().collect()
}
