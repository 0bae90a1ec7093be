//! Stream helpers shared by the adapters.
//!
//! The caller owns every stream: nothing here opens, closes or flushes
//! beyond what a single read or write needs.

use std::io::{Read, Seek, SeekFrom};

use crate::error::Result;

/// Seek back to the start so the caller can re-read what was just written.
pub fn rewind<S: Seek + ?Sized>(stream: &mut S) -> Result<()> {
    stream.seek(SeekFrom::Start(0))?;
    Ok(())
}

/// Drain the remaining bytes of a binary stream.
pub fn read_all_bytes<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Drain the remaining content of a text stream.
pub fn read_all_text<R: Read + ?Sized>(reader: &mut R) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}
