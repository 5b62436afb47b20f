#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `moodlog` binary with a clean environment that
/// stores its data under `data_dir`.
pub fn moodlog_command(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moodlog").expect("moodlog binary not built");
    configure_moodlog_command(&mut cmd, data_dir);
    cmd
}

/// Applies the standard isolated environment to an existing `Command`.
pub fn configure_moodlog_command(cmd: &mut Command, data_dir: &Path) {
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("HOME", data_dir).env("MOODLOG_DIR", data_dir);
}

/// Pulls the entry id out of `moodlog add` output.
pub fn id_from_add_output(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .find_map(|line| line.strip_prefix("id: "))
        .map(str::to_string)
        .expect("add output should contain an id line")
}
