use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("crates/grout-render/tests/fixtures")
        .join(name)
}

fn isolated(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("grout-editor");
    cmd.env("GROUT_CONFIG", temp.path().join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn render_writes_html_to_stdout() {
    let temp = TempDir::new().unwrap();
    isolated(&temp)
        .arg("render")
        .arg("--input")
        .arg(fixture("incident.json"))
        .assert()
        .success()
        .stdout(contains("<ul><a class=\"subtypes\">incidentDetails</a>"))
        .stdout(contains(
            "<li>Plural title <a class=\"subtypes_fields\">People</a></li></ul>",
        ))
        .stdout(contains("<a class=\"subtype_pro\">details</a>"));
}

#[test]
fn render_appends_to_container_file() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("page.html");
    fs::write(&page, "<h1>Incident</h1>").unwrap();

    for _ in 0..2 {
        isolated(&temp)
            .arg("render")
            .arg("--input")
            .arg(fixture("incident.yaml"))
            .arg("--container")
            .arg(&page)
            .assert()
            .success();
    }

    let html = fs::read_to_string(&page).unwrap();
    assert!(html.starts_with("<h1>Incident</h1><ul>"));
    assert_eq!(html.matches("class=\"subtypes\"").count(), 4);
}

#[test]
fn render_uses_configured_placeholder() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[render]\nplaceholder = \"undefined\"\n",
    )
    .unwrap();
    let input = temp.path().join("partial.json");
    fs::write(
        &input,
        r#"{"properties":{"a":{}},"schema":{"definitions":{"a":{"description":"D"}}}}"#,
    )
    .unwrap();

    isolated(&temp)
        .arg("render")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("<li>Title <a class=\"subtypes_fields\">undefined</a></li>"));
}

#[test]
fn render_text_format_prints_outline() {
    let temp = TempDir::new().unwrap();
    isolated(&temp)
        .args(["render", "--format", "text", "--input"])
        .arg(fixture("incident.json"))
        .assert()
        .success()
        .stdout(contains("incidentDetails\n  Description Details for Incident\n"));
}

#[test]
fn render_skips_undefined_properties_with_warning() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("orphan.json");
    fs::write(
        &input,
        r#"{"properties":{"orphan":{},"a":{}},"schema":{"definitions":{"a":{"title":"A"}}}}"#,
    )
    .unwrap();

    isolated(&temp)
        .arg("render")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("<a class=\"subtypes\">a</a>"))
        .stderr(contains("orphan"));
}

#[test]
fn render_strict_fails_on_undefined_property() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("orphan.json");
    fs::write(&input, r#"{"properties":{"orphan":{}}}"#).unwrap();

    isolated(&temp)
        .args(["render", "--strict", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("property `orphan` has no entry in schema.definitions"));
}
