use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use keydefs_test_utils::TempWorkspace;
use predicates::prelude::*;

const SCENARIO_HEADER: &str = "#ifndef KEYDEFS_H
#define KEYDEFS_H

#define POLONIEX_KEY \"k1\"
#define POLONIEX_SECRET \"s1\"
#define BITTREX_KEY \"\"
#define BITTREX_SECRET \"\"
#define BINANCE_KEY \"k3\"
#define BINANCE_SECRET \"s3\"

#endif // KEYDEFS_H
";

#[test]
fn help_output_shows_commands() {
  cargo_bin_cmd!("keydefs")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("generate"))
    .stdout(predicate::str::contains("check"))
    .stdout(predicate::str::contains("example"));
}

#[test]
fn bare_invocation_writes_scenario_header() {
  let workspace = TempWorkspace::new();

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .write_stdin("k1\ns1\n\n\nk3\ns3\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("setkeyandsecret <key> <secret>"))
    .stdout(predicate::str::contains("Generating keydefs.h..."))
    .stdout(predicate::str::contains("Enter Binance Secret"));

  assert_eq!(workspace.read_header().as_deref(), Some(SCENARIO_HEADER));
}

#[test]
fn existing_header_is_left_alone() {
  let workspace = TempWorkspace::new();
  workspace.seed_header("// hand written\n");

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .write_stdin("k1\ns1\nk2\ns2\nk3\ns3\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("keydefs.h already exists"))
    .stdout(predicate::str::contains("Enter").not());

  assert_eq!(workspace.read_header().as_deref(), Some("// hand written\n"));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_header_is_left_alone() {
  let workspace = TempWorkspace::new();
  std::os::unix::fs::symlink(workspace.path("elsewhere.h"), workspace.header_path()).expect("Failed to create symlink");

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .write_stdin("k1\ns1\nk2\ns2\nk3\ns3\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("keydefs.h already exists"))
    .stdout(predicate::str::contains("Enter").not());

  assert!(!workspace.path("elsewhere.h").exists());
}

#[test]
fn end_of_input_aborts_without_writing() {
  let workspace = TempWorkspace::new();

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .write_stdin("k1\ns1\nk2\n")
    .assert()
    .code(130)
    .stdout(predicate::str::contains("Aborted, nothing was written."));

  assert!(!workspace.header_path().exists());
}

#[test]
fn missing_output_directory_is_fatal() {
  let workspace = TempWorkspace::bare();

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .write_stdin("\n\n\n\n\n\n")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Failed to generate daemon/keydefs.h"))
    .stderr(predicate::str::contains("os error").count(1));

  assert!(!workspace.header_path().exists());
}

#[test]
fn output_flag_redirects_header() {
  let workspace = TempWorkspace::bare();
  let target = workspace.path("keys.h");

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .args(["generate", "--output", "keys.h"])
    .write_stdin("\n\n\n\n\n\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Generating keys.h..."));

  let header = fs::read_to_string(target).expect("Header was not written");
  assert!(header.starts_with("#ifndef KEYDEFS_H\n#define KEYDEFS_H\n\n"));
  assert_eq!(header.matches(" \"\"\n").count(), 6);
}

#[test]
fn example_prints_blank_template() {
  let workspace = TempWorkspace::new();

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .arg("example")
    .assert()
    .success()
    .stdout(predicate::str::starts_with("#ifndef KEYDEFS_H\n"))
    .stdout(predicate::str::contains("#define BITTREX_SECRET \"\"\n"))
    .stdout(predicate::str::ends_with("#endif // KEYDEFS_H\n"));

  assert!(!workspace.header_path().exists());
}

#[test]
fn check_reports_blank_credentials_without_values() {
  let workspace = TempWorkspace::new();
  workspace.seed_header(SCENARIO_HEADER);

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .args(["--colors", "never", "check"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Poloniex: key set, secret set"))
    .stdout(predicate::str::contains("Bittrex: key blank, secret blank"))
    .stdout(predicate::str::contains("setkeyandsecret"))
    .stdout(predicate::str::contains("k1").not());
}

#[test]
fn check_without_header_fails() {
  let workspace = TempWorkspace::new();

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .arg("check")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("No header found"));
}

#[test]
fn check_rejects_malformed_header() {
  let workspace = TempWorkspace::new();
  workspace.seed_header("#ifndef KEYDEFS_H\n#define KEYDEFS_H\n#define POLONIEX_KEY k1\n#endif // KEYDEFS_H\n");

  cargo_bin_cmd!("keydefs")
    .current_dir(workspace.root())
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("malformed definition"));
}
