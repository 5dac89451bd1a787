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

//! Branch naming conventions.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The prefixes of a fresh configuration.
pub const DEFAULT_PREFIXES: [&str; 5] =
    ["feature", "bugfix", "hotfix", "release", "docs"];

/// The separator of a fresh configuration.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Runs of whitespace in a description.
#[expect(clippy::unwrap_used, reason = "This regex is known to be valid.")]
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Characters not allowed in a branch description.
#[expect(clippy::unwrap_used, reason = "This regex is known to be valid.")]
static FORBIDDEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").unwrap());

/// The branch naming conventions.
///
/// Both fields are optional: an imported configuration may lack them, in which
/// case they stay absent until explicitly set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchConventions {
    /// The valid branch prefixes, in order of preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,
    /// The separator between the prefix and the description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

/// Errors that can occur when adding a prefix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefixError {
    /// The prefix is blank.
    #[error("The prefix cannot be empty")]
    Empty,
    /// The prefix is already in the list.
    #[error("The prefix {0} already exists")]
    Duplicate(String),
}

/// Errors that can occur when building a branch name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BranchNameError {
    /// No prefix is configured.
    #[error("There is no branch prefix in the configuration")]
    NoPrefix,
    /// The requested prefix is not configured.
    #[error("Unknown branch prefix {0}")]
    UnknownPrefix(String),
    /// The description is blank.
    #[error("The branch description cannot be empty")]
    EmptyDescription,
}

impl Default for BranchConventions {
    fn default() -> Self {
        Self {
            prefixes: Some(DEFAULT_PREFIXES.map(String::from).to_vec()),
            separator: Some(String::from(DEFAULT_SEPARATOR)),
        }
    }
}

impl BranchConventions {
    /// Returns the prefixes, or an empty list when absent.
    pub fn prefixes(&self) -> &[String] {
        self.prefixes.as_deref().unwrap_or_default()
    }

    /// Returns the separator, or the default one when absent or empty.
    pub fn separator(&self) -> &str {
        self.separator
            .as_deref()
            .filter(|separator| !separator.is_empty())
            .unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Adds a prefix at the end of the list.
    ///
    /// The prefix is trimmed before being added.
    pub fn add_prefix(&mut self, prefix: &str) -> Result<(), PrefixError> {
        let prefix = prefix.trim();

        if prefix.is_empty() {
            return Err(PrefixError::Empty);
        }

        let prefixes = self.prefixes.get_or_insert_with(Vec::new);
        if prefixes.iter().any(|existing| existing == prefix) {
            return Err(PrefixError::Duplicate(prefix.to_owned()));
        }

        prefixes.push(prefix.to_owned());
        Ok(())
    }

    /// Removes a prefix from the list.
    ///
    /// Returns whether the prefix was present.
    pub fn remove_prefix(&mut self, prefix: &str) -> bool {
        let Some(prefixes) = self.prefixes.as_mut() else {
            return false;
        };

        let len = prefixes.len();
        prefixes.retain(|existing| existing != prefix);
        prefixes.len() != len
    }

    /// Sets the separator.
    pub fn set_separator(&mut self, separator: &str) {
        self.separator = Some(separator.to_owned());
    }

    /// Builds a branch name from a free-text description.
    ///
    /// Uses `prefix` when given, otherwise the first configured prefix.
    pub fn branch_name(
        &self,
        description: &str,
        prefix: Option<&str>,
    ) -> Result<String, BranchNameError> {
        let prefix = match prefix {
            Some(prefix) => self
                .prefixes()
                .iter()
                .find(|existing| *existing == prefix)
                .ok_or_else(|| {
                    BranchNameError::UnknownPrefix(prefix.to_owned())
                })?,
            None => self.prefixes().first().ok_or(BranchNameError::NoPrefix)?,
        };

        let description = description.trim();
        if description.is_empty() {
            return Err(BranchNameError::EmptyDescription);
        }

        let separator = self.separator();
        let description = sanitize_description(description);
        Ok(format!("{prefix}{separator}{description}"))
    }
}

/// Turns a free-text description into a branch name component.
///
/// The description is lowercased, each run of whitespace becomes a hyphen and
/// any character outside `[a-z0-9-]` is removed.
pub fn sanitize_description(description: &str) -> String {
    let description = description.trim().to_lowercase();
    let description = WHITESPACE.replace_all(&description, "-");
    FORBIDDEN_CHARS.replace_all(&description, "").into_owned()
}
