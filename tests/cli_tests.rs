use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("bookshelfctl").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bookshelfctl"));
}

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("bookshelfctl").unwrap();
    cmd.args(["list", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("List books"));
}

#[test]
fn test_genres_lists_suggestions_offline() {
    let mut cmd = Command::cargo_bin("bookshelfctl").unwrap();
    cmd.arg("genres");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Science Fiction"))
        .stdout(predicate::str::contains("Romance"));
}

#[test]
fn test_add_rejects_future_year_before_any_network_use() {
    let mut cmd = Command::cargo_bin("bookshelfctl").unwrap();
    cmd.args([
        "add",
        "--title",
        "Dune",
        "--author",
        "Frank Herbert",
        "--genre",
        "Science Fiction",
        "--year",
        "3000",
        "--isbn",
        "978-0441013593",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("publication_year cannot be later"));
}

#[test]
fn test_add_rejects_blank_title() {
    let mut cmd = Command::cargo_bin("bookshelfctl").unwrap();
    cmd.args([
        "add",
        "--title",
        "   ",
        "--author",
        "Frank Herbert",
        "--genre",
        "Science Fiction",
        "--year",
        "1965",
        "--isbn",
        "978-0441013593",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("title is required"));
}

#[test]
fn test_add_requires_flags() {
    let mut cmd = Command::cargo_bin("bookshelfctl").unwrap();
    cmd.args(["add", "--title", "Dune"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_list_rejects_unknown_sort_option() {
    let mut cmd = Command::cargo_bin("bookshelfctl").unwrap();
    cmd.args(["list", "--sort", "color"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));
}
