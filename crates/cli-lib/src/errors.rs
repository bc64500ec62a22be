//! A crate-local, matchable error enum (spec §7 "Configuration errors" and
//! "the CLI shell" column), following the teacher's preference for typed
//! errors (`SQLBaseError`, `SqlError`) over an opaque `anyhow`-style one.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read stdin: {0}")]
    ReadStdin(#[source] std::io::Error),
    #[error("invalid --param '{0}', expected KEY=VALUE or a bare value")]
    InvalidParam(String),
}
