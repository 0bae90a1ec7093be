#![forbid(unsafe_code)]
//! dataslot-core: shared data model for the dataslot adapters.
//!
//! This crate contains only *pure* types and small helpers. There is
//! **no I/O** here; the readers and writers live in `dataslot-io`.
//!
//! - `schema`: logical column types (`DataType`, `Field`, `Schema`).
//! - `types`: `Scalar`, `Column` and the eager `Table`.
//! - `config`: writer options shared by the Parquet and PNG adapters.
//! - `media`: media type identifiers used when registering adapters.

pub mod config;
pub mod error;
pub mod media;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
pub use media::{PARQUET_MEDIA_TYPE, PLOTLY_MEDIA_TYPE};
pub use schema::{DataType, Field, Schema};
pub use types::{Column, Scalar, Table};
