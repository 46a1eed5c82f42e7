use assert_cmd::Command;
use std::path::Path;

pub fn replog_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("replog").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.env("REPLOG_HOME", home);
    cmd
}
