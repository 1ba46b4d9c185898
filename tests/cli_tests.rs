use std::process::Command;

fn tarmac() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tarmac"))
}

#[test]
fn test_single_argument_is_usage_error() {
    let output = tarmac().arg("10").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = tarmac().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_non_numeric_argument_is_usage_error() {
    let output = tarmac().args(["ten", "2"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ten"), "stderr was: {}", stderr);
    assert!(stderr.contains("Usage: tarmac"), "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bad_flag_value_is_usage_error() {
    let output = tarmac().args(["4", "1", "--seed", "abc"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: tarmac"), "stderr was: {}", stderr);
}

#[test]
fn test_extra_argument_is_usage_error() {
    let output = tarmac().args(["1", "2", "3"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_zero_run_exits_cleanly() {
    let output = tarmac().args(["0", "0"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 tours completed"), "stdout was: {}", stdout);
}

#[test]
fn test_fast_run_exits_cleanly() {
    let output = tarmac()
        .args(["12", "1", "--time-unit-ms", "0", "--maneuver-ms", "0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("12 waiting"), "stdout was: {}", stdout);
}

#[test]
fn test_negative_counts_are_clamped() {
    let output = tarmac()
        .args(["-4", "-1", "--time-unit-ms", "0", "--maneuver-ms", "0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("0 waiting"));
}
