use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Model deserialization or constraint failure, with the offending field path.
    #[error("validation error at `{path}`: {message}")]
    Validation { path: String, message: String },

    #[error("core error: {0}")]
    Core(#[from] dataslot_core::Error),

    #[cfg(feature = "parquet")]
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[cfg(feature = "parquet")]
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow_schema::ArrowError),

    #[cfg(feature = "polars")]
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[cfg(feature = "png")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("other error: {0}")]
    Other(String),
}

impl Error {
    /// Constraint violation on a single field, for `Model::validate`.
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            path: path.into(),
            message: message.into(),
        }
    }
}
