use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const TEST_SECRET: &str = "9f86d081884c7d659a2feaa0c55ad015";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jwt-secret"))
}

/// A command with an isolated config home and no inherited passphrase.
fn command(config_home: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("PAYLOAD_SECRET")
        .env_remove("JWT_SECRET_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait")
}

fn write_config(config_home: &Path, contents: &str) -> PathBuf {
    let path = config_home.join("jwt-secret").join("config.toml");
    std::fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
    std::fs::write(&path, contents).expect("write config");
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_cli_derive_from_env() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").env("PAYLOAD_SECRET", "test");
    let output = cmd.output().expect("run derive");
    assert!(
        output.status.success(),
        "derive failed: stdout={}, stderr={}",
        stdout(&output),
        stderr(&output)
    );
    assert_eq!(stdout(&output), format!("{}\n", TEST_SECRET));
}

#[test]
fn test_cli_derive_from_stdin_strips_newline() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").arg("--stdin");
    let output = run_with_stdin(cmd, "pássword\n");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "dd87fed9c2b4aec51b3bd03d4bd5e55b");
}

#[test]
fn test_cli_stdin_beats_env() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive")
        .arg("--stdin")
        .env("PAYLOAD_SECRET", "something-else");
    let output = run_with_stdin(cmd, "test");
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), TEST_SECRET);
}

#[test]
fn test_cli_derive_json() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").arg("--json").env("PAYLOAD_SECRET", "test");
    let output = cmd.output().expect("run derive");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(value["secret"], TEST_SECRET);
    assert_eq!(value["algorithm"], "sha256-hex-prefix-32");
    assert_eq!(value["length"], 32);
}

#[test]
fn test_cli_derive_pretty_format() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive")
        .arg("--format")
        .arg("pretty")
        .env("PAYLOAD_SECRET", "test");
    let output = cmd.output().expect("run derive");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains(&format!("Secret: {}", TEST_SECRET)));
    assert!(out.contains("Algorithm: SHA-256 hash truncated to 32 characters"));
    assert!(out.contains("Hint:"));
}

#[test]
fn test_cli_quiet_pretty_prints_only_secret() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("--quiet")
        .arg("derive")
        .arg("--format")
        .arg("pretty")
        .env("PAYLOAD_SECRET", "test");
    let output = cmd.output().expect("run derive");
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n", TEST_SECRET));
}

#[test]
fn test_cli_custom_env_flag() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive")
        .arg("--env")
        .arg("MY_APP_SECRET")
        .env("MY_APP_SECRET", "test")
        .env("PAYLOAD_SECRET", "ignored");
    let output = cmd.output().expect("run derive");
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), TEST_SECRET);
}

#[test]
fn test_cli_config_env_var_is_used() {
    let home = TempDir::new().expect("tempdir");
    write_config(home.path(), "[input]\nenv_var = \"FROM_CONFIG\"\n");
    let mut cmd = command(home.path());
    cmd.arg("derive").env("FROM_CONFIG", "test");
    let output = cmd.output().expect("run derive");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), TEST_SECRET);
}

#[test]
fn test_cli_config_format_pretty() {
    let home = TempDir::new().expect("tempdir");
    write_config(home.path(), "[ui]\nformat = \"pretty\"\nascii = true\n");
    let mut cmd = command(home.path());
    cmd.arg("derive").env("PAYLOAD_SECRET", "test");
    let output = cmd.output().expect("run derive");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("[OK]"));
    assert!(out.contains(&format!("Secret: {}", TEST_SECRET)));
}

#[test]
fn test_cli_blank_stdin_is_invalid_input() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").arg("--stdin");
    let output = run_with_stdin(cmd, "   \n");
    assert_eq!(output.status.code(), Some(4));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Passphrase cannot be empty"));
}

#[test]
fn test_cli_blank_stdin_json_error() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").arg("--stdin").arg("--json");
    let output = run_with_stdin(cmd, "");
    assert_eq!(output.status.code(), Some(4));
    let value: serde_json::Value =
        serde_json::from_str(stderr(&output).trim()).expect("parse error json");
    assert_eq!(value["kind"], "invalid_input");
    assert_eq!(value["error"], "Passphrase cannot be empty");
}

#[test]
fn test_cli_blank_stdin_hint_names_stdin() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").arg("--stdin");
    let output = run_with_stdin(cmd, "\u{FEFF}\n");
    assert_eq!(output.status.code(), Some(4));
    let err = stderr(&output);
    assert!(err.contains("--stdin"), "stderr={}", err);
    assert!(!err.contains("PAYLOAD_SECRET"));
}

#[test]
fn test_cli_next_line_env_value_is_hashed() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").env("PAYLOAD_SECRET", "\u{0085}");
    let output = cmd.output().expect("run derive");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output).trim_end().len(), 32);
}

#[cfg(unix)]
#[test]
fn test_cli_non_utf8_env_is_invalid_input() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive")
        .arg("--no-input")
        .env("PAYLOAD_SECRET", OsStr::from_bytes(&[0x66, 0xff, 0x6f]));
    let output = cmd.output().expect("run derive");
    assert_eq!(output.status.code(), Some(4));
    let err = stderr(&output);
    assert!(err.contains("PAYLOAD_SECRET is not valid UTF-8"), "stderr={}", err);
    assert!(!err.contains("No passphrase provided"));
}

#[test]
fn test_cli_no_passphrase_without_tty() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").arg("--no-input");
    let output = cmd.output().expect("run derive");
    assert_eq!(output.status.code(), Some(4));
    let err = stderr(&output);
    assert!(err.contains("No passphrase provided"));
    assert!(err.contains("PAYLOAD_SECRET"));
}

#[test]
fn test_cli_whitespace_env_is_ignored() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").env("PAYLOAD_SECRET", "   ");
    let output = cmd.output().expect("run derive");
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("No passphrase provided"));
}

#[test]
fn test_cli_missing_explicit_config_exit_code() {
    let home = TempDir::new().expect("tempdir");
    let missing = home.path().join("nope.toml");
    let mut cmd = command(home.path());
    cmd.arg("--config")
        .arg(&missing)
        .arg("derive")
        .env("PAYLOAD_SECRET", "test");
    let output = cmd.output().expect("run derive");
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Config file not found"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_cli_debug_log_reports_config_location() {
    let home = TempDir::new().expect("tempdir");
    let path = write_config(home.path(), "[input]\nenv_var = \"FROM_CONFIG\"\n");
    let mut cmd = command(home.path());
    cmd.arg("-vv").arg("derive").env("FROM_CONFIG", "test");
    let output = cmd.output().expect("run derive");
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("config resolved"), "stderr={}", err);
    assert!(err.contains(&path.display().to_string()));
}

#[test]
fn test_cli_completions_do_not_read_config() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("--config")
        .arg(home.path().join("nope.toml"))
        .arg("completions")
        .arg("bash");
    let output = cmd.output().expect("run completions");
    assert!(output.status.success());
}

#[test]
fn test_cli_broken_config_reports_path() {
    let home = TempDir::new().expect("tempdir");
    write_config(home.path(), "[ui\n");
    let mut cmd = command(home.path());
    cmd.arg("derive").env("PAYLOAD_SECRET", "test");
    let output = cmd.output().expect("run derive");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse config"));
}

#[test]
fn test_cli_invalid_format_exit_code() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("derive").arg("--format").arg("fancy");
    let output = cmd.output().expect("run derive");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_verbose_logs_never_leak_secret() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("-vvv")
        .arg("derive")
        .env("PAYLOAD_SECRET", "correct-horse-battery");
    let output = cmd.output().expect("run derive");
    assert!(output.status.success());
    let secret = stdout(&output).trim_end().to_string();
    assert_eq!(secret.len(), 32);

    let err = stderr(&output);
    assert!(err.contains("deriving"), "expected log output, got: {}", err);
    assert!(!err.contains(&secret));
    assert!(!err.contains("correct-horse-battery"));
}

#[test]
fn test_cli_quickstart_output() {
    let home = TempDir::new().expect("tempdir");
    let output = command(home.path()).output().expect("run");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Quickstart:"));
    assert!(out.contains("jwt-secret derive"));
}

#[test]
fn test_cli_completions() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = command(home.path());
    cmd.arg("completions").arg("bash");
    let output = cmd.output().expect("run completions");
    assert!(output.status.success());
    assert!(stdout(&output).contains("jwt-secret"));
}
