//! Media type identifiers handed to the data slot framework at registration.
//!
//! These are opaque to this crate; JSON and PNG identifiers are supplied by
//! the embedding framework.

/// Apache Parquet files (both tabular engines).
pub const PARQUET_MEDIA_TYPE: &str = "application/vnd.apache.parquet";

/// Plotly figure JSON as produced by the chart writer.
pub const PLOTLY_MEDIA_TYPE: &str = "application/vnd.plotly.v1+json";
