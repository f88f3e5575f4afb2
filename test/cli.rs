// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::RemoteFixture;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs::{read, write};

#[test]
fn help_lists_commands() -> Result<()> {
    Command::cargo_bin("iggen")?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("gen"));

    Ok(())
}

#[test]
fn command_long_help_shows_examples() -> Result<()> {
    Command::cargo_bin("iggen")?
        .args(["gen", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iggen gen go rust --banners"));

    Ok(())
}

#[test]
fn missing_arguments_fail() -> Result<()> {
    Command::cargo_bin("iggen")?.assert().failure();
    Command::cargo_bin("iggen")?.arg("search").assert().failure();
    Command::cargo_bin("iggen")?.arg("gen").assert().failure();
    Command::cargo_bin("iggen")?.arg("frobnicate").assert().failure();

    Ok(())
}

#[test]
fn list_prints_one_template_per_line() -> Result<()> {
    let mut fixture = RemoteFixture::new()?;
    let listing = fixture.mock_listing();

    fixture
        .iggen()?
        .arg("list")
        .assert()
        .success()
        .stdout("Go\nPython\nNode\n");
    listing.assert();

    Ok(())
}

#[test]
fn list_reports_api_failure() -> Result<()> {
    let mut fixture = RemoteFixture::new()?;
    let _status = fixture.mock_status("/contents", 500);

    fixture.iggen()?.arg("list").assert().failure().code(1);

    Ok(())
}

#[test]
fn search_prints_count_and_matches() -> Result<()> {
    let mut fixture = RemoteFixture::new()?;
    let _listing = fixture.mock_listing();

    fixture
        .iggen()?
        .args(["search", "pyth"])
        .assert()
        .success()
        .stdout("found 1 matching template(s):\n  Python\n");

    fixture
        .iggen()?
        .args(["search", "cobol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no matching templates"));

    Ok(())
}

#[test]
fn gen_merges_templates_in_request_order() -> Result<()> {
    let mut fixture = RemoteFixture::new()?;
    let _listing = fixture.mock_listing();
    let _template = fixture.mock_template("Go", "go-content");
    let _template = fixture.mock_template("Python", "py-content");

    fixture
        .iggen()?
        .args(["gen", "go", "PYTHON"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go, PYTHON"));

    let result = read(fixture.workdir().join(".gitignore"))?;
    assert_eq!(result, b"go-contentpy-content");

    Ok(())
}

#[test]
fn gen_force_overwrites_existing_file() -> Result<()> {
    let mut fixture = RemoteFixture::new()?;
    let _listing = fixture.mock_listing();
    let _template = fixture.mock_template("Node", "node_modules/\n");
    write(fixture.workdir().join(".gitignore"), "stale rules that are longer\n")?;

    fixture
        .iggen()?
        .args(["gen", "--force", "--banners", "node"])
        .assert()
        .success();

    let result = read(fixture.workdir().join(".gitignore"))?;
    assert_eq!(result, b"### node ###\nnode_modules/\n");

    Ok(())
}

#[test]
fn gen_unknown_template_writes_nothing() -> Result<()> {
    let mut fixture = RemoteFixture::new()?;
    let _listing = fixture.mock_listing();
    let _template = fixture.mock_template("Go", "go-content");

    fixture
        .iggen()?
        .args(["gen", "Go", "Cobol"])
        .assert()
        .failure()
        .code(1);
    assert!(!fixture.workdir().join(".gitignore").exists());

    Ok(())
}

#[test]
fn gen_failed_fetch_writes_nothing() -> Result<()> {
    let mut fixture = RemoteFixture::new()?;
    let _listing = fixture.mock_listing();
    let _template = fixture.mock_template("Go", "go-content");
    let _status = fixture.mock_status("/raw/Python.gitignore", 404);

    fixture
        .iggen()?
        .args(["gen", "Go", "Python"])
        .assert()
        .failure()
        .code(1);
    assert!(!fixture.workdir().join(".gitignore").exists());

    Ok(())
}

#[test]
fn gen_piped_yes_overwrites_existing_file() -> Result<()> {
    let mut fixture = RemoteFixture::new()?;
    let _listing = fixture.mock_listing();
    let _template = fixture.mock_template("Go", "go-content");
    write(fixture.workdir().join(".gitignore"), "old\n")?;

    fixture
        .iggen()?
        .args(["gen", "Go"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("generated .gitignore from templates: Go"));

    let result = read(fixture.workdir().join(".gitignore"))?;
    assert_eq!(result, b"go-content");

    Ok(())
}

#[test]
fn gen_piped_decline_keeps_existing_file() -> Result<()> {
    let mut fixture = RemoteFixture::new()?;
    let _listing = fixture.mock_listing();
    let _template = fixture.mock_template("Go", "go-content");
    write(fixture.workdir().join(".gitignore"), "old\n")?;

    for answer in ["", "n\n", "yes please\n"] {
        fixture
            .iggen()?
            .args(["gen", "Go"])
            .write_stdin(answer)
            .assert()
            .success()
            .code(0)
            .stdout(predicate::str::contains("operation cancelled"));

        let result = read(fixture.workdir().join(".gitignore"))?;
        assert_eq!(result, b"old\n");
    }

    Ok(())
}
