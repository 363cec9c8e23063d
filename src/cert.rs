//! TLS certificate lookup and loading

use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Stat the certificate path.
///
/// Not-found is an answer, not an error; any other stat failure
/// propagates with its cause.
pub fn file_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Read the full certificate file into memory.
pub fn read_certificate(path: &Path) -> Result<Vec<u8>> {
    let pem = std::fs::read(path)?;
    debug!("read {} certificate bytes from {}", pem.len(), path.display());
    Ok(pem)
}
