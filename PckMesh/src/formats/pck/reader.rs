//! `.pck` file reading

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{Group, GroupScanner};
use crate::error::Result;

/// Read a .pck file from disk and decode its groups
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, and any
/// scanning error from [`parse_pck_bytes`].
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_pck<P: AsRef<Path>>(path: P) -> Result<Vec<Group>> {
    let buffer = read_pck_buffer(path)?;
    parse_pck_bytes(&buffer)
}

/// Decode the groups of a PCK buffer
///
/// # Errors
///
/// Returns [`Error::Corrupted`] if a declared section does not fit in the
/// buffer, or [`Error::FacePatternNotFound`] if a group has no faces.
///
/// [`Error::Corrupted`]: crate::Error::Corrupted
/// [`Error::FacePatternNotFound`]: crate::Error::FacePatternNotFound
pub fn parse_pck_bytes(data: &[u8]) -> Result<Vec<Group>> {
    GroupScanner::new(data).scan()
}

pub(crate) fn read_pck_buffer<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    tracing::debug!("Reading PCK file: {:?}", path.as_ref());
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}
