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

//! End-to-end tests of the git-conventions CLI.

#![allow(clippy::pedantic, clippy::restriction)]

use assert_cmd::Command;
use assert_fs::{TempDir, prelude::*};
use eyre::Result;
use predicates::prelude::*;

////////////////////////////////////////////////////////////////////////////////
//                                  Helpers                                   //
////////////////////////////////////////////////////////////////////////////////

const CONFIG_FILE: &str = "github_convention_manager.json";

fn git_conventions(temp_dir: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("git-conventions")?;
    cmd.current_dir(temp_dir.path())
        .env("GIT_CONVENTIONS_DIR", temp_dir.child("data").path())
        .env("NO_COLOR", "1")
        .env_remove("GIT_CONVENTIONS_LOG");
    Ok(cmd)
}

fn run(temp_dir: &TempDir, args: &[&str]) -> Result<()> {
    git_conventions(temp_dir)?.args(args).assert().success();
    Ok(())
}

fn stored_config(temp_dir: &TempDir) -> Result<serde_json::Value> {
    let path = temp_dir.child("data").child(CONFIG_FILE);
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

fn template_ids(temp_dir: &TempDir) -> Result<Vec<String>> {
    let config = stored_config(temp_dir)?;
    Ok(config["templates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|template| template["id"].as_str().unwrap().to_owned())
        .collect())
}

////////////////////////////////////////////////////////////////////////////////
//                                  Prefixes                                  //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn prefix_list_shows_the_default_prefixes() -> Result<()> {
    let temp_dir = TempDir::new()?;

    git_conventions(&temp_dir)?
        .args(["prefix", "list"])
        .assert()
        .success()
        .stdout("feature\nbugfix\nhotfix\nrelease\ndocs\n");

    temp_dir.child("data").child(CONFIG_FILE).assert(predicate::path::missing());
    Ok(())
}

#[test]
fn prefix_add_appends_the_prefix() -> Result<()> {
    let temp_dir = TempDir::new()?;

    git_conventions(&temp_dir)?
        .args(["prefix", "add", "chore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The prefix chore has been added."));

    git_conventions(&temp_dir)?
        .args(["prefix", "list"])
        .assert()
        .success()
        .stdout("feature\nbugfix\nhotfix\nrelease\ndocs\nchore\n");

    Ok(())
}

#[test]
fn prefix_add_rejects_duplicates() -> Result<()> {
    let temp_dir = TempDir::new()?;

    git_conventions(&temp_dir)?
        .args(["prefix", "add", "hotfix"])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("already exists"));

    Ok(())
}

#[test]
fn prefix_remove_removes_the_prefix() -> Result<()> {
    let temp_dir = TempDir::new()?;
    run(&temp_dir, &["prefix", "remove", "feature"])?;

    git_conventions(&temp_dir)?
        .args(["prefix", "list"])
        .assert()
        .success()
        .stdout("bugfix\nhotfix\nrelease\ndocs\n");

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                                  Branches                                  //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn branch_uses_the_first_prefix_and_default_separator() -> Result<()> {
    let temp_dir = TempDir::new()?;

    git_conventions(&temp_dir)?
        .args(["branch", "Add", "the Login page!"])
        .assert()
        .success()
        .stdout("feature/add-the-login-page\n");

    Ok(())
}

#[test]
fn branch_uses_the_configured_separator_and_given_prefix() -> Result<()> {
    let temp_dir = TempDir::new()?;
    run(&temp_dir, &["separator", "_"])?;

    git_conventions(&temp_dir)?
        .args(["separator"])
        .assert()
        .success()
        .stdout("_\n");

    git_conventions(&temp_dir)?
        .args(["branch", "--prefix", "bugfix", "crash on start"])
        .assert()
        .success()
        .stdout("bugfix_crash-on-start\n");

    Ok(())
}

#[test]
fn branch_rejects_unknown_prefixes() -> Result<()> {
    let temp_dir = TempDir::new()?;

    git_conventions(&temp_dir)?
        .args(["branch", "--prefix", "chore", "something"])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("unknown branch prefix chore"));

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                                 Repository                                 //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn repo_sets_and_shows_the_repository_url() -> Result<()> {
    let temp_dir = TempDir::new()?;
    run(&temp_dir, &["repo", "  https://github.com/org/repo  "])?;

    git_conventions(&temp_dir)?
        .arg("repo")
        .assert()
        .success()
        .stdout("https://github.com/org/repo\n");

    assert_eq!(
        stored_config(&temp_dir)?["repositoryUrl"],
        "https://github.com/org/repo"
    );

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                                 Templates                                  //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn template_add_then_preview() -> Result<()> {
    let temp_dir = TempDir::new()?;
    run(
        &temp_dir,
        &[
            "template",
            "add",
            "Feature",
            "--content",
            "# Summary\n- **what**\n- *why*",
        ],
    )?;

    let ids = template_ids(&temp_dir)?;
    assert_eq!(ids.len(), 1);

    git_conventions(&temp_dir)?
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ids[0].as_str()))
        .stdout(predicate::str::contains("Feature"));

    git_conventions(&temp_dir)?
        .args(["template", "preview", ids[0].as_str()])
        .assert()
        .success()
        .stdout(
            "<h1>Summary</h1><br><ul><li><strong>what</strong></li></ul><br>\
                <ul><li><em>why</em></li></ul>\n",
        );

    Ok(())
}

#[test]
fn template_add_reads_the_content_from_a_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    temp_dir.child("template.md").write_str("## Checklist\n")?;

    run(&temp_dir, &["template", "add", "Checklist", "--file", "template.md"])?;

    let ids = template_ids(&temp_dir)?;
    git_conventions(&temp_dir)?
        .args(["template", "show", ids[0].as_str()])
        .assert()
        .success()
        .stdout("## Checklist\n");

    Ok(())
}

#[test]
fn template_add_rejects_blank_content() -> Result<()> {
    let temp_dir = TempDir::new()?;

    git_conventions(&temp_dir)?
        .args(["template", "add", "Empty", "--content", "  "])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("content cannot be empty"));

    Ok(())
}

#[test]
fn template_edit_keeps_the_id_and_creation_date() -> Result<()> {
    let temp_dir = TempDir::new()?;
    run(&temp_dir, &["template", "add", "Old", "--content", "old"])?;
    let before = stored_config(&temp_dir)?;
    let id = before["templates"][0]["id"].as_str().unwrap().to_owned();

    run(
        &temp_dir,
        &["template", "edit", id.as_str(), "--name", "New", "--content", "new"],
    )?;

    let after = stored_config(&temp_dir)?;
    let template = &after["templates"][0];
    assert_eq!(template["id"], id.as_str());
    assert_eq!(template["name"], "New");
    assert_eq!(template["content"], "new");
    assert_eq!(template["createdAt"], before["templates"][0]["createdAt"]);

    Ok(())
}

#[test]
fn template_edit_rejects_unknown_ids() -> Result<()> {
    let temp_dir = TempDir::new()?;

    git_conventions(&temp_dir)?
        .args(["template", "edit", "unknown", "--content", "text"])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("no template with the identifier"));

    Ok(())
}

#[test]
fn template_remove_deletes_the_template() -> Result<()> {
    let temp_dir = TempDir::new()?;
    run(&temp_dir, &["template", "add", "First", "--content", "one"])?;
    run(&temp_dir, &["template", "add", "Second", "--content", "two"])?;
    let ids = template_ids(&temp_dir)?;

    run(&temp_dir, &["template", "remove", ids[0].as_str(), "--yes"])?;

    assert_eq!(template_ids(&temp_dir)?, vec![ids[1].clone()]);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                               Export / import                              //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn export_writes_the_configuration_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    run(&temp_dir, &["repo", "https://example.com/repo"])?;
    run(&temp_dir, &["export"])?;

    temp_dir
        .child("github-conventions-config.json")
        .assert(predicate::str::contains(
            "  \"repositoryUrl\": \"https://example.com/repo\",\n",
        ));

    Ok(())
}

#[test]
fn export_then_import_restores_the_configuration() -> Result<()> {
    let source = TempDir::new()?;
    run(&source, &["prefix", "add", "chore"])?;
    run(&source, &["template", "add", "Default", "--content", "text"])?;
    run(&source, &["export"])?;

    let target = TempDir::new()?;
    let export = source.child("github-conventions-config.json");
    run(&target, &["import", export.path().to_str().unwrap()])?;

    assert_eq!(stored_config(&target)?, stored_config(&source)?);
    Ok(())
}

#[test]
fn import_rejects_invalid_files_and_keeps_the_configuration() -> Result<()> {
    let temp_dir = TempDir::new()?;
    run(&temp_dir, &["repo", "https://example.com/repo"])?;
    temp_dir.child("invalid.json").write_str("not json")?;
    let before = stored_config(&temp_dir)?;

    git_conventions(&temp_dir)?
        .args(["import", "invalid.json"])
        .assert()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("invalid format"));

    assert_eq!(stored_config(&temp_dir)?, before);
    Ok(())
}

#[test]
fn changes_after_a_partial_import_keep_the_imported_data() -> Result<()> {
    let temp_dir = TempDir::new()?;
    temp_dir.child("partial.json").write_str(
        r##"{
            "repositoryUrl": "https://example.com/repo",
            "templates": [{"id": "1", "name": "Feature", "content": "# Title"}]
        }"##,
    )?;

    run(&temp_dir, &["import", "partial.json"])?;
    run(&temp_dir, &["prefix", "add", "chore"])?;

    let config = stored_config(&temp_dir)?;
    assert_eq!(config["repositoryUrl"], "https://example.com/repo");
    assert_eq!(template_ids(&temp_dir)?, ["1"]);

    git_conventions(&temp_dir)?
        .args(["template", "preview", "1"])
        .assert()
        .success()
        .stdout("<h1>Title</h1>\n");

    Ok(())
}
