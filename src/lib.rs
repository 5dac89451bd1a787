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

//! A Git extension to manage branch naming conventions and pull request
//! templates.
//!
//! The configuration is persisted as a single JSON document through a
//! [`Storage`](storage::Storage). [`ConfigStore`](config::ConfigStore) reads
//! and writes it, and [`TemplateEngine`](template::TemplateEngine) manages the
//! templates it contains.

pub mod branch;
mod command;
pub mod config;
pub mod storage;
pub mod template;
mod tracing;

pub use command::GitConventions;
