pub mod json;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(feature = "polars")]
pub mod polars;
