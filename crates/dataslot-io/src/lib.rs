#![forbid(unsafe_code)]
//! dataslot-io: reader/writer adapters for data slot bindings.
//!
//! Writers take `(stream, value)` and readers take `(stream)`, so each
//! function can be registered directly as a data slot callback.
//!
//! - `readers`/`writers`: JSON mapping and model adapters (always built).
//! - `readers::parquet`/`writers::parquet`: Arrow engine over `Table`.
//! - `readers::polars`/`writers::polars`: polars engine, eager and lazy.
//! - `writers::png` + `figure`: figure rendering to PNG.
//! - `plotly` + `writers::plotly`: Plotly chart JSON from a `Table`.
//!
//! Everything except JSON is behind a cargo feature of the same name.

pub mod error;
pub mod readers;
pub mod stream;
pub mod writers;

#[cfg(feature = "parquet")]
pub mod arrow_convert;

#[cfg(feature = "png")]
pub mod figure;

#[cfg(feature = "plotly")]
pub mod plotly;

pub use dataslot_core::{PARQUET_MEDIA_TYPE, PLOTLY_MEDIA_TYPE};
pub use error::{Error, Result};
pub use readers::json::{model_reader, read_json_mapping, Model, ModelReader};
pub use writers::json::{write_json_mapping, write_model_json};
