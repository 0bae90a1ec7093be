//! Parquet readers backed by polars (enabled with `--features polars`).
//!
//! The eager readers catch `PolarsError` while decoding, log a warning and
//! return `Ok(None)`. The lazy readers do not look at the bytes at all: they
//! hand back a `LazyFrame` whose scan only runs on `collect()`, so invalid
//! input fails there, as an ordinary error and never as `None`.

use std::io::{Cursor, Read};
use std::sync::Arc;

use ::polars::prelude::*;
use polars_utils::mmap::MemSlice;

use crate::error::{Error, Result};
use crate::stream::read_all_bytes;

/// Read an eager `DataFrame` from a Parquet `buffer`.
///
/// Returns `Ok(None)` if the buffer does not contain valid Parquet data.
pub fn polars_eager_reader<R: Read + ?Sized>(buffer: &mut R) -> Result<Option<DataFrame>> {
    let bytes = read_all_bytes(buffer)?;
    Ok(decode_or_warn(bytes))
}

/// Read several Parquet buffers and stack their rows in buffer order.
///
/// A buffer that fails to decode turns the whole result into `Ok(None)`.
/// Buffers whose schemas do not stack are an error.
pub fn polars_eager_collection_reader<R: Read>(buffers: &mut [R]) -> Result<Option<DataFrame>> {
    if buffers.is_empty() {
        return Err(Error::Other("no parquet buffers to read".into()));
    }

    let mut combined: Option<DataFrame> = None;
    for buffer in buffers.iter_mut() {
        let bytes = read_all_bytes(buffer)?;
        let Some(df) = decode_or_warn(bytes) else {
            return Ok(None);
        };
        match combined.as_mut() {
            Some(acc) => {
                acc.vstack_mut(&df)?;
            }
            None => combined = Some(df),
        }
    }
    Ok(combined)
}

/// Wrap a Parquet `buffer` in a deferred scan without decoding it.
pub fn polars_lazy_reader<R: Read + ?Sized>(buffer: &mut R) -> Result<LazyFrame> {
    let bytes = read_all_bytes(buffer)?;
    scan_buffers(vec![bytes])
}

/// Deferred scan over several Parquet buffers, concatenated in buffer order.
pub fn polars_lazy_collection_reader<R: Read>(buffers: &mut [R]) -> Result<LazyFrame> {
    if buffers.is_empty() {
        return Err(Error::Other("no parquet buffers to scan".into()));
    }
    let contents = buffers
        .iter_mut()
        .map(|buffer| read_all_bytes(buffer))
        .collect::<Result<Vec<_>>>()?;
    scan_buffers(contents)
}

fn decode_or_warn(bytes: Vec<u8>) -> Option<DataFrame> {
    let len = bytes.len();
    match ParquetReader::new(Cursor::new(bytes)).finish() {
        Ok(df) => {
            tracing::debug!(bytes = len, rows = df.height(), "decoded parquet buffer");
            Some(df)
        }
        Err(err) => {
            tracing::warn!(error = %err, bytes = len, "invalid parquet buffer");
            None
        }
    }
}

fn scan_buffers(contents: Vec<Vec<u8>>) -> Result<LazyFrame> {
    let slices: Arc<[MemSlice]> = contents.into_iter().map(MemSlice::from_vec).collect();
    let frame = LazyFrame::scan_parquet_sources(ScanSources::Buffers(slices), ScanArgsParquet::default())?;
    Ok(frame)
}
