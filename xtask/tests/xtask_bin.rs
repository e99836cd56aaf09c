use std::process::Command;

fn xtask(arg: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg(arg)
        .output()
        .expect("run xtask")
}

#[test]
fn xtask_help_runs() {
    let output = xtask("help");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
}

#[test]
fn xtask_conform_accepts_fixtures() {
    let output = xtask("conform");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "conform failed:\n{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("labels_denied checked"));
}

#[test]
fn xtask_explain_coverage_passes() {
    let output = xtask("explain-coverage");
    assert!(output.status.success());
}

#[test]
fn xtask_rejects_unknown_command() {
    let output = xtask("frobnicate");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown xtask command"));
}
