//! Exit-code and flag tests for the service binary.

use std::process::Command;

#[test]
fn version_flag_prints_name_and_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_polytrim"))
        .arg("--version")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("polytrim"), "{}", stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "{}", stdout);
}

#[test]
fn help_flag_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_polytrim"))
        .arg("--help")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("address"), "{}", stdout);
    assert!(stdout.contains("port"), "{}", stdout);
}

#[test]
fn unresolvable_address_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_polytrim"))
        .args(["host.invalid", "33700"])
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to bind"), "{}", stderr);
}
