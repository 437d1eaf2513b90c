use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `daybook` binary with a clean environment whose
/// data and export directories both point at `data_dir`.
pub fn daybook_command(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    cmd.env("HOME", data_dir)
        .env("DAYBOOK_DIR", data_dir)
        .env("RUST_LOG", "warn");
    cmd
}
