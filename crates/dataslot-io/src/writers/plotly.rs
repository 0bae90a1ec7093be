//! Plotly chart JSON writer (enabled with `--features plotly`).

use std::io::Write;

use dataslot_core::types::Table;

use crate::error::Result;
use crate::plotly::to_plotly_json;

/// Convert `table` with [`to_plotly_json`] and write it as indented JSON.
pub fn plotly_json_writer<W: Write + ?Sized>(writer: &mut W, table: &Table) -> Result<()> {
    let document = to_plotly_json(table)?;
    serde_json::to_writer_pretty(&mut *writer, &document)?;
    Ok(())
}
