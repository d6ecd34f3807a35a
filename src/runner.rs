use std::process::Command;
use std::time::Instant;

use log::debug;

use crate::error::MinifyError;

/// Result of executing a command: raw output + metadata.
#[derive(Debug)]
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub elapsed_ms: u128,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawn a process, capture stdout/stderr separately, measure time.
/// Blocks on child exit (OS wait, no polling). No timeout is applied,
/// so a hung child hangs the caller.
pub fn exec(program: &str, args: &[String]) -> Result<RunResult, MinifyError> {
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| MinifyError::Spawn {
            program: program.to_string(),
            message: e.to_string(),
        })?;

    let elapsed_ms = start.elapsed().as_millis();
    let exit_code = output.status.code().unwrap_or(-1);
    debug!("`{program}` exited {exit_code} after {elapsed_ms}ms");

    Ok(RunResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code,
        elapsed_ms,
    })
}
