use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// The whole file as raw bytes; no encoding is assumed.
pub fn read_document(path: &Path) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

/// Create or truncate `path`, write `data` and sync it to disk. The file is
/// closed when this returns, on success or failure.
pub fn write_document(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}
