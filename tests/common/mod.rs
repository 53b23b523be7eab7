use assert_cmd::cargo_bin;
use std::path::Path;
use std::process::Command;

pub fn freela_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("freela"));
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}
