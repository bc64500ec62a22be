//! File/stdin reading, mirroring the teacher's `cli/src/stdin.rs` split of
//! "is this a stdin request" from "read a path".

use std::io::Read;
use std::path::Path;

use crate::errors::CliError;

pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        None => read_stdin(),
        Some(p) if p.as_os_str() == "-" => read_stdin(),
        Some(p) => std::fs::read_to_string(p).map_err(|source| CliError::ReadFile {
            path: p.to_path_buf(),
            source,
        }),
    }
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::ReadStdin)?;
    Ok(buf)
}
