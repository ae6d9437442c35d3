//! CliChecker tests against stub shell scripts standing in for the real
//! Pi4 checker. Unix only; the real tool is exercised manually.

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use pi4_bench::checker::{Checker, CliChecker};
use pi4_bench::sweep::{run_sweep, SweepConfig};

/// Write an executable stub script into `dir` and return its path.
fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn stub_output_is_captured_and_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "checker.sh", "echo '  0.0042  '");

    let checker = CliChecker::from_path(&stub);
    let output = checker
        .check(
            Path::new("a_safe.pi4"),
            Path::new("a_safe.pi4_type"),
            &[],
            Duration::ZERO,
        )
        .unwrap();

    assert!(output.exit_success);
    assert_eq!(output.runtime, "0.0042");
}

#[test]
fn stub_receives_args_in_invocation_order() {
    let dir = tempfile::tempdir().unwrap();
    let args_file = dir.path().join("args.txt");
    let stub = write_stub(
        dir.path(),
        "checker.sh",
        &format!("echo \"$@\" > {}\necho 0.1", args_file.display()),
    );

    let checker = CliChecker::from_path(&stub);
    checker
        .check(
            Path::new("programs/a_safe.pi4"),
            Path::new("programs/a_safe.pi4_type"),
            &["-f".to_string(), "-d".to_string()],
            Duration::ZERO,
        )
        .unwrap();

    let args = std::fs::read_to_string(&args_file).unwrap();
    assert_eq!(
        args.trim(),
        "programs/a_safe.pi4 -t programs/a_safe.pi4_type -f -d"
    );
}

#[test]
fn stub_nonzero_exit_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "checker.sh", "exit 3");

    let checker = CliChecker::from_path(&stub);
    let output = checker
        .check(
            Path::new("a_safe.pi4"),
            Path::new("a_safe.pi4_type"),
            &[],
            Duration::ZERO,
        )
        .unwrap();

    assert!(!output.exit_success);
    assert_eq!(output.runtime, "");
}

#[test]
fn stub_empty_output_yields_empty_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "checker.sh", "true");

    let checker = CliChecker::from_path(&stub);
    let output = checker
        .check(
            Path::new("a_safe.pi4"),
            Path::new("a_safe.pi4_type"),
            &[],
            Duration::ZERO,
        )
        .unwrap();

    assert!(output.exit_success);
    assert_eq!(output.runtime, "");
}

#[test]
fn stub_timeout_kills_a_hung_checker() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "checker.sh", "sleep 60");

    let checker = CliChecker::from_path(&stub);
    let result = checker.check(
        Path::new("a_safe.pi4"),
        Path::new("a_safe.pi4_type"),
        &[],
        Duration::from_secs(1),
    );

    assert!(result.is_err());
}

#[test]
fn full_sweep_against_stub_checker() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "checker.sh", "echo 0.0042");

    let config = SweepConfig {
        programs: vec!["a".into()],
        suffixes: vec!["_safe".into()],
        flag_sets: vec![vec![], vec!["-f".into()]],
        rounds: 2,
        checker: stub.clone(),
        ..Default::default()
    };
    let checker = CliChecker::from_path(&stub);
    let rows = run_sweep(&checker, &config).unwrap();

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.runtime == "0.0042"));
}
