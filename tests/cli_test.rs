use std::process::Command;

fn run_cli(channels: &str) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_tg-preview-feed"))
        .env("INPUT_TELEGRAM-CHANNELS", channels)
        .env("RUST_LOG", "info")
        .env_remove("LOG_FORMAT")
        .output()
        .expect("failed to run binary");

    let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
    log.push_str(&String::from_utf8_lossy(&output.stderr));
    (output.status.success(), log)
}

#[test]
fn fatal_errors_are_reported_and_exit_nonzero() {
    let (success, log) = run_cli("@");

    assert!(!success);
    assert!(log.contains("Fatal error"), "{log}");
    assert!(log.contains("INPUT_TELEGRAM-CHANNELS"), "{log}");
}
