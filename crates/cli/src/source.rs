//! Byte-source materialization.
//!
//! The hashing engine accepts only fully materialized messages, so every
//! source is read to the end before hashing starts. Large files are read in
//! one `fs::read` call; there is no streaming path.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub(crate) fn read_stdin() -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    io::stdin().lock().read_to_end(&mut data)?;
    tracing::debug!(bytes = data.len(), "materialized standard input");
    Ok(data)
}

pub(crate) fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let data = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "materialized input file");
    Ok(data)
}
