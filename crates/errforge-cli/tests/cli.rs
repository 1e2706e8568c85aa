//! End-to-end tests: run the `errforge` binary against fixture sources in a
//! temporary directory and inspect the generated file.

use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = r#"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Err(pub &'static str);

pub const ErrOpen: Err = Err("failed to open {{filename String %q}}");
pub const ErrTimeout: Err = Err("wrap:operation timed out");
pub const ErrClosed: Err = Err("nowrap:already closed");
"#;

fn errforge() -> Command {
    Command::cargo_bin("errforge").expect("binary built")
}

#[test]
fn test_generates_declarations_for_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("errors.rs"), FIXTURE).unwrap();

    errforge()
        .args(["--type", "Err"])
        .arg(dir.path())
        .assert()
        .success();

    let generated = std::fs::read_to_string(dir.path().join("err_def.rs")).unwrap();
    assert!(generated.contains("DO NOT EDIT"));
    assert!(generated.contains("struct errOpen"));
    assert!(generated.contains("struct errTimeout"));
    assert!(generated.contains("struct errClosed"));
    // Spec order follows declaration order.
    let open = generated.find("struct errOpen").unwrap();
    let timeout = generated.find("struct errTimeout").unwrap();
    let closed = generated.find("struct errClosed").unwrap();
    assert!(open < timeout && timeout < closed);
}

#[test]
fn test_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("errors.rs"), FIXTURE).unwrap();
    let out = dir.path().join("generated.rs");

    errforge()
        .args(["--type", "Err", "--output"])
        .arg(&out)
        .arg(dir.path().join("errors.rs"))
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn test_public_flag_uppercases_declarations() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("errors.rs"), FIXTURE).unwrap();

    errforge()
        .args(["--type", "Err", "-P"])
        .arg(dir.path())
        .assert()
        .success();

    let generated = std::fs::read_to_string(dir.path().join("err_def.rs")).unwrap();
    assert!(generated.contains("pub struct ErrOpen"));
    assert!(generated.contains("fn NewErrOpen"));
}

#[test]
fn test_no_specs_found_is_a_friendly_noop() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lib.rs"), "pub fn nothing() {}\n").unwrap();

    errforge()
        .args(["--type", "Err"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no specs of type Err found"));

    assert!(!dir.path().join("err_def.rs").exists());
}

#[test]
fn test_malformed_accessor_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("errors.rs"),
        r#"
        pub struct Err(pub &'static str);
        pub const ErrBad: Err = Err("broken {{a..b String %s}}");
        "#,
    )
    .unwrap();

    errforge()
        .args(["--type", "Err"])
        .arg(dir.path())
        .assert()
        .failure();

    assert!(!dir.path().join("err_def.rs").exists());
}

#[test]
fn test_missing_type_flag_is_an_error() {
    errforge().assert().failure();
}
