#![forbid(unsafe_code)]
//! dataslot: reader/writer adapters for data slot bindings.
//!
//! Facade over the workspace crates. The adapters themselves live in
//! `dataslot-io`; the data model and configuration in `dataslot-core`.
//! Enable `parquet`, `polars`, `png` or `plotly` (or `full`) for the
//! optional adapters.

pub use dataslot_io::{readers, stream, writers};

#[cfg(feature = "png")]
pub use dataslot_io::figure;

#[cfg(feature = "plotly")]
pub use dataslot_io::plotly;

pub use dataslot_core::config::{Compression, IoConfig, ParquetConfig, PngConfig};
pub use dataslot_core::{Column, DataType, Field, Scalar, Schema, Table};
pub use dataslot_core::{PARQUET_MEDIA_TYPE, PLOTLY_MEDIA_TYPE};
pub use dataslot_io::{
    model_reader, read_json_mapping, write_json_mapping, write_model_json, Error, Model,
    ModelReader, Result,
};
