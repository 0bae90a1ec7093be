//! Parquet writers backed by polars (enabled with `--features polars`).
//!
//! Every writer rewinds its buffer to position 0 once the file is complete.

use std::io::{Seek, Write};

use ::polars::prelude::*;
use dataslot_core::config::{Compression, ParquetConfig};

use crate::error::{Error, Result};
use crate::stream::rewind;

fn to_polars_compression(compression: Compression) -> ParquetCompression {
    match compression {
        Compression::Uncompressed => ParquetCompression::Uncompressed,
        Compression::Snappy => ParquetCompression::Snappy,
        Compression::Gzip => ParquetCompression::Gzip(None),
        Compression::Zstd => ParquetCompression::Zstd(None),
        Compression::Lz4 => ParquetCompression::Lz4Raw,
    }
}

fn write_frame<W>(buffer: &mut W, df: &mut DataFrame, config: &ParquetConfig) -> Result<()>
where
    W: Write + Seek,
{
    config.validate()?;
    let written = ParquetWriter::new(&mut *buffer)
        .with_compression(to_polars_compression(config.compression))
        .with_row_group_size(config.max_row_group_size)
        .finish(df)?;
    tracing::debug!(bytes = written, rows = df.height(), "wrote parquet frame");
    rewind(buffer)
}

/// Write an eager frame to `buffer` as Parquet.
pub fn polars_eager_writer<W: Write + Seek>(buffer: &mut W, df: &DataFrame) -> Result<()> {
    polars_eager_writer_with_config(buffer, df, &ParquetConfig::default())
}

pub fn polars_eager_writer_with_config<W: Write + Seek>(
    buffer: &mut W,
    df: &DataFrame,
    config: &ParquetConfig,
) -> Result<()> {
    // `finish` needs `&mut` to rechunk; the clone only copies column handles.
    let mut df = df.clone();
    write_frame(buffer, &mut df, config)
}

/// Write frame `i` to buffer `i`.
pub fn polars_eager_collection_writer<W: Write + Seek>(
    buffers: &mut [W],
    frames: &[DataFrame],
) -> Result<()> {
    if buffers.len() != frames.len() {
        return Err(Error::Other(format!(
            "{} frames cannot be written to {} buffers",
            frames.len(),
            buffers.len()
        )));
    }
    for (buffer, df) in buffers.iter_mut().zip(frames) {
        polars_eager_writer(buffer, df)?;
    }
    Ok(())
}

/// Evaluate a deferred frame and write the result to `buffer` as Parquet.
///
/// Evaluation errors propagate; nothing is written in that case.
pub fn polars_lazy_writer<W: Write + Seek>(buffer: &mut W, frame: &LazyFrame) -> Result<()> {
    polars_lazy_writer_with_config(buffer, frame, &ParquetConfig::default())
}

pub fn polars_lazy_writer_with_config<W: Write + Seek>(
    buffer: &mut W,
    frame: &LazyFrame,
    config: &ParquetConfig,
) -> Result<()> {
    let mut df = frame.clone().with_streaming(true).collect()?;
    write_frame(buffer, &mut df, config)
}
