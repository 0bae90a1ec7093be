//! Parquet reader into `Table` through Arrow (enabled with `--features parquet`).
//!
//! Bytes that are not valid Parquet are not an error here: the decode
//! failure is logged as a warning and the reader returns `Ok(None)`.
//! Stream I/O errors and column types `Table` cannot hold still propagate.
//! Parquet 53 sizes dictionary buffers from the page header, so a corrupt
//! header can abort on allocation before any error is returned.

use std::io::Read;

use arrow_array::RecordBatch;
use arrow_schema::{ArrowError, SchemaRef};
use bytes::Bytes;
use dataslot_core::types::Table;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::arrow_convert::{arrow_to_core_schema, record_batch_to_table};
use crate::error::{Error, Result};
use crate::stream::read_all_bytes;

/// Read a `Table` from a Parquet `buffer`.
///
/// Returns `Ok(None)` if the buffer does not contain valid Parquet data.
pub fn parquet_buffer_reader<R: Read + ?Sized>(buffer: &mut R) -> Result<Option<Table>> {
    let bytes = Bytes::from(read_all_bytes(buffer)?);
    let Some((schema, batches)) = decode_or_warn(bytes)? else {
        return Ok(None);
    };
    batches_to_table(schema, &batches).map(Some)
}

/// Read several Parquet buffers and append their rows in buffer order.
///
/// Any buffer that fails to decode turns the whole result into `Ok(None)`.
/// Buffers with differing schemas are a schema error.
pub fn parquet_buffer_collection_reader<R: Read>(buffers: &mut [R]) -> Result<Option<Table>> {
    if buffers.is_empty() {
        return Err(Error::Other("no parquet buffers to read".into()));
    }

    let mut combined: Option<Table> = None;
    for buffer in buffers.iter_mut() {
        let bytes = Bytes::from(read_all_bytes(buffer)?);
        let Some((schema, batches)) = decode_or_warn(bytes)? else {
            return Ok(None);
        };
        let table = batches_to_table(schema, &batches)?;
        match combined.as_mut() {
            Some(acc) => acc.append(table)?,
            None => combined = Some(table),
        }
    }
    Ok(combined)
}

fn decode(bytes: Bytes) -> Result<(SchemaRef, Vec<RecordBatch>)> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(bytes)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;
    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok((schema, batches))
}

/// Decode, mapping Parquet/Arrow decode failures to `None` with a warning.
fn decode_or_warn(bytes: Bytes) -> Result<Option<(SchemaRef, Vec<RecordBatch>)>> {
    let len = bytes.len();
    match decode(bytes) {
        Ok(decoded) => {
            tracing::debug!(bytes = len, batches = decoded.1.len(), "decoded parquet buffer");
            Ok(Some(decoded))
        }
        Err(err @ (Error::Parquet(_) | Error::Arrow(_))) => {
            tracing::warn!(error = %err, bytes = len, "invalid parquet buffer");
            Ok(None)
        }
        Err(other) => Err(other),
    }
}

fn batches_to_table(schema: SchemaRef, batches: &[RecordBatch]) -> Result<Table> {
    let mut table = Table::empty(&arrow_to_core_schema(schema.as_ref())?);
    for batch in batches {
        table.append(record_batch_to_table(batch)?)?;
    }
    Ok(table)
}

#[cfg(not(feature = "parquet"))]
compile_error!("parquet.rs was compiled without the `parquet` feature; enable `--features parquet` or exclude this module.");
