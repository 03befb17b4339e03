use std::fs;
use std::path::Path;

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use predicates::prelude::*;
use tempfile::TempDir;

/// `pdex` with its config directory pointed at `config_home`.
fn pdex(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pdex").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("PORT")
        .env_remove("PDEX_HOST")
        .env_remove("RUST_LOG");
    cmd
}

fn write_pdf(path: &Path, lines: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), 720.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("Td", vec![0.into(), (-24).into()]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

#[test]
fn test_extract_missing_input() {
    let home = TempDir::new().unwrap();
    pdex(home.path())
        .args(["extract", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_extract_pdf_to_json() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("resume.pdf");
    write_pdf(
        &input,
        &["John Smith", "Project Manager", "Call me at 555-123-4567", "john@example.com"],
    );

    pdex(home.path())
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Name": "John Smith""#))
        .stdout(predicate::str::contains(r#""Email": "john@example.com""#))
        .stdout(predicate::str::contains(r#""Address": "Address Not Found""#));
}

#[test]
fn test_extract_rejects_non_pdf() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("notes.pdf");
    fs::write(&input, "John Smith, jane@example.com").unwrap();

    pdex(home.path())
        .arg("extract")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to process"));
}

#[test]
fn test_extract_plain_text_as_csv() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("notes.txt");
    fs::write(&input, "Reach me at jane@example.com or 555-123-4567").unwrap();

    pdex(home.path())
        .args(["extract", "--text", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Name,Address,Phone,Email,Role\n"))
        .stdout(predicate::str::contains("555-123-4567,jane@example.com"));
}

#[test]
fn test_extract_writes_output_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("notes.txt");
    let output = home.path().join("out.txt");
    fs::write(&input, "nothing useful here").unwrap();

    pdex(home.path())
        .args(["extract", "--text", "-f", "text", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("Email:   Email Not Found"));
    assert!(written.contains("Role:    Role Not Found"));
}

#[test]
fn test_config_init_then_get() {
    let home = TempDir::new().unwrap();

    pdex(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));

    pdex(home.path()).args(["config", "init"]).assert().success();
    assert!(home.path().join("pdex").join("config.json").exists());

    pdex(home.path())
        .args(["config", "set", "server.port", "8080"])
        .assert()
        .success();

    pdex(home.path())
        .args(["config", "get", "server.port"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8080"));

    pdex(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_commands_use_explicit_file() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("custom.json");

    pdex(home.path())
        .arg("-c")
        .arg(&custom)
        .args(["config", "set", "server.port", "8080"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!home.path().join("pdex").join("config.json").exists());

    pdex(home.path())
        .arg("--config")
        .arg(&custom)
        .args(["config", "get", "server.port"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8080"));

    pdex(home.path())
        .args(["config", "get", "server.port"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5000"));

    pdex(home.path())
        .arg("-c")
        .arg(&custom)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"))
        .stdout(predicate::str::contains("exists"));
}
