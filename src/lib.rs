//! Deterministic pack selection engine for weight-capped item pools.
//!
//! `packer-core` parses lines describing a pack (a weight capacity plus a
//! pool of candidate items), validates the pool against fixed limits, and
//! selects the subset with the highest total cost that fits the capacity,
//! preferring lower total weight on cost ties. All operations are
//! deterministic — identical inputs always produce identical outputs.

pub mod input;
pub mod pack;
pub mod selection;
pub mod types;

use std::path::Path;

use thiserror::Error;

use crate::input::{read_packs, InputError, ParsedPack};
use crate::pack::Pack;
use crate::selection::{render, validate_pool, Selector, ValidationError};

#[derive(Debug, Error)]
pub enum PackerError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Resolve every pack described by the file at `path`.
///
/// Returns one rendered line per input line, in input order, joined by `\n`.
/// The first unreadable file, malformed line, or limit violation aborts the
/// whole run.
pub fn pack(path: impl AsRef<Path>) -> Result<String, PackerError> {
    let packs = read_packs(path)?;

    let mut lines = Vec::with_capacity(packs.len());
    for parsed in &packs {
        let solved = solve_pack(parsed)?;
        lines.push(render(&solved));
    }

    Ok(lines.join("\n"))
}

/// Validate and resolve a single parsed pack.
///
/// The returned [`Pack`] never exceeds the capacity and holds its items in
/// ascending index order, ready for [`render`].
pub fn solve_pack(parsed: &ParsedPack) -> Result<Pack, ValidationError> {
    validate_pool(&parsed.pool)?;
    Ok(Selector::new().select(parsed.pool.items(), parsed.capacity))
}
