//! Writer configuration.
//!
//! Nothing here is read from the environment or from disk; the embedding
//! framework builds these values (directly or via serde) and passes them to
//! the `_with_config` writer variants.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Compression codec for Parquet output, shared by both tabular engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Uncompressed,
    /// Fast, good compression
    #[default]
    Snappy,
    Gzip,
    Zstd,
    Lz4,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParquetConfig {
    pub compression: Compression,
    /// Maximum rows per row group; engine default when `None`.
    pub max_row_group_size: Option<usize>,
}

impl ParquetConfig {
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_max_row_group_size(mut self, rows: usize) -> Self {
        self.max_row_group_size = Some(rows);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_row_group_size == Some(0) {
            return Err(Error::Config("max_row_group_size must be > 0".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PngConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl PngConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "png canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// All adapter options in one place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    pub parquet: ParquetConfig,
    pub png: PngConfig,
}

impl IoConfig {
    pub fn validate(&self) -> Result<()> {
        self.parquet.validate()?;
        self.png.validate()
    }
}
