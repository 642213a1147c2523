//! Shared helpers for driving the service binary.

use assert_cmd::Command;
use tempfile::TempDir;

pub const BINARY: &str = "chief-of-staff";

/// The status sequence the service prints for `mode`.
pub fn expected_output(mode: &str) -> String {
    format!(
        "Digital Chief of Staff - Starting...\nVersion: 0.1.0\nEnvironment: {}\nReady to assist!\n",
        mode
    )
}

/// A command running in an empty temp dir with a clean environment.
///
/// The returned dir must outlive the command.
pub fn isolated_command() -> (Command, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin(BINARY).unwrap();
    cmd.current_dir(dir.path())
        .env_remove("NODE_ENV")
        .env_remove("RUST_LOG")
        .env_remove("CHIEF_CONFIG");
    (cmd, dir)
}
