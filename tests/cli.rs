use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn compile_defaults_to_html() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path())
        .arg("compile")
        .arg(fixture("organization.csv"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<code style=\"white-space:pre;\">"))
        .stdout(predicate::str::contains("&quot;").not())
        .stdout(predicate::str::contains("\"@id\": \"#org\""));
    Ok(())
}

#[test]
fn compile_writes_json_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("out.jsonld");

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path())
        .args(["compile", "--format", "json", "--output"])
        .arg(&output)
        .arg(fixture("organization.csv"));

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote 2 block(s)"));

    let content = fs::read_to_string(&output)?;
    let blocks = serde_json::Deserializer::from_str(&content)
        .into_iter::<Value>()
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1]["@type"], "PostalAddress");
    Ok(())
}

#[test]
fn project_config_changes_context() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("ldsheet.yml"),
        "context: https://schema.org\noutput:\n  format: json\n",
    )?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path())
        .arg("compile")
        .arg(fixture("organization.csv"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"@context\": \"https://schema.org\""));
    Ok(())
}

#[test]
fn compile_warns_about_orphan_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let table = dir.path().join("table.csv");
    fs::write(&table, "Notes,Section,ID,Type,Property,Value\n,,#x,Thing,,stray\n")?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path())
        .args(["compile", "-f", "json"])
        .arg(&table);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("value 'stray' has no property"))
        .stderr(predicate::str::contains("1 row(s) need attention"));
    Ok(())
}

#[test]
fn resolve_prints_target() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path())
        .arg("resolve")
        .arg(fixture("organization.csv"))
        .arg("--catalog")
        .arg(fixture("catalog.csv"))
        .args(["--row", "1"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let resolution: Value = serde_json::from_slice(&output)?;

    assert_eq!(resolution["status"], "apply");
    assert_eq!(resolution["column"], "E");
    assert_eq!(resolution["row_count"], 5);
    assert_eq!(resolution["allowed_values"][0], "name");
    Ok(())
}

#[test]
fn resolve_reports_ignored_edits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path())
        .arg("resolve")
        .arg(fixture("organization.csv"))
        .arg("--catalog")
        .arg(fixture("catalog.csv"))
        .args(["--row", "1", "--column", "F"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"reason\": \"other_column\""));
    Ok(())
}

#[test]
fn resolve_fails_on_unknown_type() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path())
        .arg("resolve")
        .arg(fixture("organization.csv"))
        .arg("--catalog")
        .arg(fixture("catalog.csv"))
        .args(["--row", "1", "--value", "Spaceship"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown type 'Spaceship'"));
    Ok(())
}

#[test]
fn inspect_config_shows_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path()).args(["inspect", "config"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let config: Value = serde_json::from_slice(&output)?;

    assert_eq!(config["context"], "http://schema.org");
    assert_eq!(config["layout"]["type"], "D");
    assert_eq!(config["catalog"]["prefix"], "http://schema.org/");
    Ok(())
}

#[test]
fn inspect_rows_requires_a_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path()).args(["inspect", "rows"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Path required for rows inspection"));
    Ok(())
}

#[test]
fn missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path())
        .args(["--config", "nope.yml", "inspect", "config"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
    Ok(())
}

#[test]
fn malformed_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("ldsheet.yml"), "layout:\n  type: [D\n")?;

    let mut cmd = Command::cargo_bin("ldsheet")?;
    cmd.current_dir(dir.path()).args(["inspect", "config"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
    Ok(())
}
