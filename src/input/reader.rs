use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::parser::{parse_line, ParseError, ParsedPack};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line_number}: {source}")]
    Parse {
        line_number: usize,
        #[source]
        source: ParseError,
    },
}

/// Read and decode every pack line from the file at `path`.
///
/// Blank lines are skipped; any other line must decode. Parse failures carry
/// the 1-based line number of the offending line.
pub fn read_packs(path: impl AsRef<Path>) -> Result<Vec<ParsedPack>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut packs = Vec::new();
    for (at, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parse_line(line).map_err(|source| InputError::Parse {
            line_number: at + 1,
            source,
        })?;
        packs.push(parsed);
    }
    Ok(packs)
}
