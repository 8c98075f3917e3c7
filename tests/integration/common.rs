use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_dbmcp");
pub const BASE_URL: &str = "https://dbmcp.example.com/mcp";

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Command preconfigured with the valid fixture and a quiet log filter.
pub fn dbmcp() -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .env("DBMCP_CONFIG_PATH", fixture("tests/fixtures/config_valid.toml"))
        .env_remove("DBMCP_SERVICE__BASE_URL")
        .env("RUST_LOG", "warn");
    command
}

/// Run `command`, feeding `stdin` when provided.
pub fn run(mut command: Command, stdin: Option<&str>) -> Result<Output> {
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = command.spawn().context("failed to spawn dbmcp")?;
    {
        let mut pipe = child.stdin.take().context("child stdin")?;
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes())
                .context("failed to write stdin")?;
        }
    }
    child.wait_with_output().context("failed to wait for dbmcp")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
