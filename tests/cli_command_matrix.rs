use assert_cmd::Command;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = Command::cargo_bin("estaghni").expect("binary built");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    run_help(&home, &["search"]);
    run_help(&home, &["show"]);
    run_help(&home, &["stats"]);
    run_help(&home, &["categories"]);
    run_help(&home, &["validate"]);
}
