use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// All failures surfaced by the CLI. Subprocess variants carry the raw
/// stderr / OS error text so callers can still substring-match on it.
#[derive(Error, Debug)]
pub enum MinifyError {
    /// Bad input to the byte formatter.
    #[error("Expected a finite number, got {0}")]
    NonFiniteSize(f64),

    /// `--option` was not a JSON object.
    #[error("invalid --option JSON: {0}")]
    BadOptions(#[from] serde_json::Error),

    /// Engine identifier not in the registry.
    #[error("unknown engine `{0}`")]
    UnknownEngine(String),

    /// The external program could not be started at all.
    #[error("failed to run `{program}`: {message}")]
    Spawn { program: String, message: String },

    /// The external program ran but exited non-zero.
    #[error("[{engine}] exited non-zero: {stderr}")]
    EngineFailed { engine: &'static str, stderr: String },

    /// The installed runtime is too old for the engine. `hint` is the
    /// stable text callers match on; `diagnostic` is the raw stderr.
    #[error("{hint} ({diagnostic})")]
    IncompatibleRuntime {
        engine: &'static str,
        hint: &'static str,
        diagnostic: String,
    },

    /// The engine reported success but wrote nothing.
    #[error("[{engine}] produced an empty output file: {}", .path.display())]
    EmptyOutput { engine: &'static str, path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}
