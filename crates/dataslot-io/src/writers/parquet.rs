//! Parquet writer for `Table` through Arrow (enabled with `--features parquet`).
//!
//! Supports:
//! - Compression codecs (SNAPPY, GZIP, ZSTD, LZ4, UNCOMPRESSED)
//! - Configurable row group size
//!
//! The buffer is rewound to position 0 after the footer is written.
//! A table needs at least one column: Parquet files without leaf columns
//! cannot be decoded again.

use std::io::{Seek, Write};

use dataslot_core::config::{Compression, ParquetConfig};
use dataslot_core::types::Table;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression as ParquetCodec, GzipLevel, ZstdLevel};
use parquet::file::properties::WriterProperties;

use crate::arrow_convert::table_to_record_batch;
use crate::error::{Error, Result};
use crate::stream::rewind;

/// Convert to Parquet's Compression enum.
fn to_parquet_compression(compression: Compression) -> ParquetCodec {
    match compression {
        Compression::Uncompressed => ParquetCodec::UNCOMPRESSED,
        Compression::Snappy => ParquetCodec::SNAPPY,
        Compression::Gzip => ParquetCodec::GZIP(GzipLevel::default()),
        Compression::Zstd => ParquetCodec::ZSTD(ZstdLevel::default()),
        Compression::Lz4 => ParquetCodec::LZ4_RAW,
    }
}

fn writer_properties(config: &ParquetConfig) -> WriterProperties {
    let mut props_builder =
        WriterProperties::builder().set_compression(to_parquet_compression(config.compression));
    if let Some(rows) = config.max_row_group_size {
        props_builder = props_builder.set_max_row_group_size(rows);
    }
    props_builder.build()
}

/// Write `table` to `buffer` as Parquet with default options.
pub fn parquet_buffer_writer<W>(buffer: &mut W, table: &Table) -> Result<()>
where
    W: Write + Seek + Send,
{
    parquet_buffer_writer_with_config(buffer, table, &ParquetConfig::default())
}

/// Write `table` to `buffer` as Parquet using `config`.
pub fn parquet_buffer_writer_with_config<W>(
    buffer: &mut W,
    table: &Table,
    config: &ParquetConfig,
) -> Result<()>
where
    W: Write + Seek + Send,
{
    config.validate()?;
    if table.num_columns() == 0 {
        return Err(Error::Schema(
            "cannot write a table without columns to parquet".into(),
        ));
    }
    let batch = table_to_record_batch(table)?;

    let mut writer = ArrowWriter::try_new(&mut *buffer, batch.schema(), Some(writer_properties(config)))?;
    writer.write(&batch)?;
    let metadata = writer.close()?;

    tracing::debug!(
        rows = metadata.num_rows,
        row_groups = metadata.row_groups.len(),
        "wrote parquet table"
    );
    rewind(buffer)
}

#[cfg(not(feature = "parquet"))]
compile_error!("parquet.rs was compiled without the `parquet` feature; enable `--features parquet` or exclude this module.");
