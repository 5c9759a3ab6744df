/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

#[test]
fn binary_shows_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("termfire"),
        "Help output should mention termfire"
    );
}

#[test]
fn binary_shows_version() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = Command::new("cargo")
        .args(["run", "--", "nonexistent-command"])
        .output()
        .expect("Failed to execute cargo run");

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid subcommand should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Invalid subcommand should not cause panic"
    );
}

#[test]
fn print_mode_renders_a_frame() {
    let output = Command::new("cargo")
        .args(["run", "--", "print", "--ticks", "30", "--seed", "7"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Print mode failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains('▀'), "Frame should be drawn with half blocks");
    assert!(stdout.contains("\x1b[38;2;"), "Frame should carry RGB colors");
}

#[test]
fn print_mode_tolerates_bad_values() {
    let output = Command::new("cargo")
        .args(["run", "--", "print", "--density", "0", "--wind", "sideways", "--ticks", "5"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown wind direction"));
    assert!(!stderr.contains("panicked at"));
}
