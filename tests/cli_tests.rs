use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

fn bookshelf_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    bookshelf_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL API"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    bookshelf_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();
    bookshelf_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("input AuthorInput"))
        .stdout(predicate::str::contains("createAuthor"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let content = fs::read_to_string(temp_dir.path().join(".bookshelf.yml")).unwrap();
    assert!(content.contains("port: 4000"));
    assert!(content.contains("/graphql"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    bookshelf_cmd(&temp_dir).arg("init").assert().success();

    bookshelf_cmd(&temp_dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    bookshelf_cmd(&temp_dir)
        .args(["init", "--force"])
        .assert()
        .success();
}

// =============================================================================
// Query / mutate
// =============================================================================

#[test]
fn test_query_seed_data() {
    let temp_dir = TempDir::new().unwrap();

    let output = bookshelf_cmd(&temp_dir)
        .args(["query", "{ books { id title author { name } } }"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        stdout_json(&output),
        json!({
            "data": {
                "books": [
                    { "id": "1", "title": "1984", "author": { "name": "George Orwell" } },
                    { "id": "2", "title": "To Kill a Mockingbird", "author": { "name": "Harper Lee" } }
                ]
            }
        })
    );
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd(&temp_dir)
        .args([
            "query",
            "query ($id: ID!) { author(id: $id) { name } }",
            "--variables",
            r#"{"id": "2"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Harper Lee"));
}

#[test]
fn test_query_missing_book_is_null() {
    let temp_dir = TempDir::new().unwrap();

    let output = bookshelf_cmd(&temp_dir)
        .args(["query", r#"{ book(id: "42") { id } }"#])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(stdout_json(&output), json!({ "data": { "book": null } }));
}

#[test]
fn test_mutate_add_book() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd(&temp_dir)
        .args([
            "mutate",
            r#"addBook(title: "Brave New World", authorId: "1") { id title }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "3""#))
        .stdout(predicate::str::contains("Brave New World"));
}

#[test]
fn test_invalid_query_fails() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd(&temp_dir)
        .args(["query", "{ books { isbn } }"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd(&temp_dir)
        .args(["query", "{ books { id } }", "--variables", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--variables"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_unseeded_store_from_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".bookshelf.yml"),
        "store:\n  seed: false\n",
    )
    .unwrap();

    let output = bookshelf_cmd(&temp_dir)
        .args(["query", "{ books { id } authors { id } }"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        stdout_json(&output),
        json!({ "data": { "books": [], "authors": [] } })
    );
}

#[test]
fn test_seed_file_from_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let conf_dir = temp_dir.path().join("conf");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("seed.yml"),
        "books:\n  - id: \"7\"\n    title: Kindred\n    authorId: \"3\"\nauthors:\n  - id: \"3\"\n    name: Octavia E. Butler\n",
    )
    .unwrap();
    fs::write(conf_dir.join("bookshelf.yml"), "store:\n  seed_file: seed.yml\n").unwrap();

    bookshelf_cmd(&temp_dir)
        .args([
            "--config",
            "conf/bookshelf.yml",
            "query",
            r#"{ book(id: "7") { title author { name } } }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kindred"))
        .stdout(predicate::str::contains("Octavia E. Butler"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd(&temp_dir)
        .args(["--config", "nope.yml", "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
