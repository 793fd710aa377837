use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

// Smoke tests against the bundled dataset, human-readable output.

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("estaghni").expect("binary built");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn search_bundled_catalog_text_output() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .args(["search", "safia"])
        .assert()
        .success()
        .stdout(contains("LOCAL"))
        .stdout(contains("Safia"));
}

#[test]
fn show_bundled_product_lists_reasons_and_alternatives() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .args(["show", "nescafe"])
        .assert()
        .success()
        .stdout(contains("status: BOYCOTT"))
        .stdout(contains("reasons:"))
        .stdout(contains("alternatives:"));
}

#[test]
fn stats_bundled_catalog_text_output() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("total:"))
        .stdout(contains("boycotted:"));
}

#[test]
fn categories_bundled_catalog_text_output() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("Boissons"));
}

#[test]
fn validate_bundled_catalog() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("catalog valid"));
}
