//! Synchronous file I/O operations.
//!
//! Each call opens, fully reads or writes, and closes its file before
//! returning; no handle outlives the call.

use std::fs as std_fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::IoError;

/// Read a script as raw bytes.
///
/// Content is opaque: no decoding, size limit or binary check, so Latin-1
/// bytes and stray NULs reach the caller untouched.
///
/// # Errors
/// `IoError::NotFound` when the file does not exist, `IoError::System` for
/// any other open or read failure.
///
/// # Example
///
/// ```rust,ignore
/// use ahk_io::read_script;
///
/// let content = read_script("Main.ahk")?;
/// ```
pub fn read_script<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, IoError> {
    let path = path.as_ref();
    std_fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_string_lossy().to_string()),
        _ => IoError::System(err),
    })
}

/// Write `contents` to `path`, creating or truncating the file.
///
/// # Errors
/// Returns `IoError::System` when the file cannot be created or written.
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), IoError> {
    let mut file = std_fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(())
}
