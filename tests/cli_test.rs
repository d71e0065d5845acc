#![cfg(unix)]

use std::fs;
use std::process::{Command, Output};
use std::time::{Duration, Instant};

/// Helper: run the built binary with `dir` as working directory.
fn porter(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_porter"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn with_env(dir: &std::path::Path) {
    let bin = dir.join(".venv").join("bin");
    fs::create_dir_all(&bin).unwrap();
    std::os::unix::fs::symlink("/bin/sh", bin.join("python")).unwrap();
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_environment_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("run.py"), "exit 0\n").unwrap();

    let output = porter(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("not found"));
    assert!(err.contains("-m venv .venv"));
}

#[test]
fn missing_entry_point_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    with_env(dir.path());

    let output = porter(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("run.py not found"));
    assert!(err.contains("project root"));
}

#[test]
fn entry_success_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    with_env(dir.path());
    fs::write(dir.path().join("run.py"), "exit 0\n").unwrap();

    assert_eq!(porter(dir.path(), &[]).status.code(), Some(0));
}

#[test]
fn entry_failure_is_propagated() {
    let dir = tempfile::tempdir().unwrap();
    with_env(dir.path());
    fs::write(dir.path().join("run.py"), "exit 42\n").unwrap();

    assert_eq!(porter(dir.path(), &[]).status.code(), Some(42));
}

#[test]
fn entry_inherits_standard_streams() {
    let dir = tempfile::tempdir().unwrap();
    with_env(dir.path());
    fs::write(
        dir.path().join("run.py"),
        "echo to-stdout\necho to-stderr >&2\n",
    )
    .unwrap();

    let output = porter(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "to-stdout\n");
    assert_eq!(stderr(&output), "to-stderr\n");
}

#[test]
fn version_flag_prints_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = porter(dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unexpected_arguments_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    with_env(dir.path());
    fs::write(dir.path().join("run.py"), "touch ran\n").unwrap();

    let output = porter(dir.path(), &["extra"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("ran").exists());
}

#[test]
fn interrupt_waits_for_entry_point() {
    let dir = tempfile::tempdir().unwrap();
    with_env(dir.path());
    fs::write(
        dir.path().join("run.py"),
        "touch started\nsleep 1\necho done > done.txt\nexit 5\n",
    )
    .unwrap();

    let mut launcher = Command::new(env!("CARGO_BIN_EXE_porter"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .spawn()
        .unwrap();

    // Wait until the entry point is running, so the interrupt handler is in place.
    let deadline = Instant::now() + Duration::from_secs(5);
    while !dir.path().join("started").exists() {
        assert!(Instant::now() < deadline, "entry point never started");
        std::thread::sleep(Duration::from_millis(20));
    }
    std::thread::sleep(Duration::from_millis(100));

    let sent = Command::new("kill")
        .args(["-INT", &launcher.id().to_string()])
        .status()
        .unwrap();
    assert!(sent.success());

    let status = launcher.wait().unwrap();
    assert_eq!(status.code(), Some(5));
    assert!(dir.path().join("done.txt").exists());
}
