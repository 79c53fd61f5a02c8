//! On-disk snapshot format and atomic replacement.
//!
//! A snapshot is the whole collection as a pretty-printed JSON array. It is
//! written to a sibling temp file first and then renamed over the primary
//! file, so the primary path only ever holds a complete snapshot.

use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix of the backup taken when a corrupted file is moved aside.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Suffix of the temp file a snapshot is staged in.
pub const TEMP_SUFFIX: &str = ".tmp";

/// Reasons a data file cannot be accepted as a snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Not JSON, or not an array of exact contact objects
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    /// Two records share an id
    #[error("duplicate contact id {0}")]
    DuplicateId(u64),
}

/// `path` with `suffix` appended to its final component.
pub fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Parse raw file contents into contacts, in file order.
///
/// Besides the record shape, ids must be unique. A file with two records
/// sharing an id is rejected as [`SnapshotError::DuplicateId`] and goes through
/// the same backup-and-reset path as malformed JSON, even though plain
/// array deserialization would accept it.
pub fn parse(bytes: &[u8]) -> Result<Vec<Contact>, SnapshotError> {
    let contacts: Vec<Contact> = serde_json::from_slice(bytes)?;

    let mut seen = HashSet::with_capacity(contacts.len());
    for contact in &contacts {
        if !seen.insert(contact.id) {
            return Err(SnapshotError::DuplicateId(contact.id));
        }
    }

    Ok(contacts)
}

/// Serialize contacts as two-space indented JSON. Non-ASCII text is kept as is.
pub fn render(contacts: &[Contact]) -> StoreResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(contacts)?)
}

/// Stage a snapshot in `temp_path` and flush it to disk.
///
/// The primary file is untouched until [`commit`] runs.
pub fn write_temp(temp_path: &Path, contacts: &[Contact]) -> StoreResult<()> {
    let bytes = render(contacts)?;

    let result = File::create(temp_path).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });

    result.map_err(|e| {
        let _ = fs::remove_file(temp_path);
        StoreError::io(temp_path, e)
    })
}

/// Replace `path` with the staged snapshot in a single rename.
pub fn commit(temp_path: &Path, path: &Path) -> StoreResult<()> {
    fs::rename(temp_path, path).map_err(|e| StoreError::io(path, e))
}

/// Write a full snapshot to `path` through `temp_path`.
pub fn write_atomic(path: &Path, temp_path: &Path, contacts: &[Contact]) -> StoreResult<()> {
    write_temp(temp_path, contacts)?;
    commit(temp_path, path)
}
