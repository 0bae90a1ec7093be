//! Pretty-printed JSON writers for mappings and models.
//!
//! Output uses two-space indentation and no trailing newline. The stream is
//! left positioned after the written text.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;

/// Serialize a string-keyed mapping to `writer` as indented JSON.
///
/// Values that cannot be represented in JSON (for example a nested map
/// keyed by tuples) fail the whole write.
pub fn write_json_mapping<W, V>(writer: &mut W, mapping: &IndexMap<String, V>) -> Result<()>
where
    W: Write + ?Sized,
    V: Serialize,
{
    serde_json::to_writer_pretty(&mut *writer, mapping)?;
    Ok(())
}

/// Serialize a model with its own field names and types.
pub fn write_model_json<W, M>(writer: &mut W, model: &M) -> Result<()>
where
    W: Write + ?Sized,
    M: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *writer, model)?;
    Ok(())
}
