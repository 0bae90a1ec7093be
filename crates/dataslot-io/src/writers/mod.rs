pub mod json;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(feature = "polars")]
pub mod polars;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "plotly")]
pub mod plotly;
