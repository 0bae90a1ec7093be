//! JSON readers: order-preserving mappings and schema-checked models.

use std::io::Read;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::stream::read_all_text;

/// A record type that can be read from and written to JSON.
///
/// Implementors get field/type checking from serde; `validate` adds
/// constraints serde cannot express.
pub trait Model: Serialize + DeserializeOwned {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Reader bound to one model type; see [`model_reader`].
pub struct ModelReader<T> {
    _model: PhantomData<fn() -> T>,
}

impl<T: Model> ModelReader<T> {
    pub fn new() -> Self {
        Self {
            _model: PhantomData,
        }
    }

    /// Read the whole stream and validate it into `T`.
    pub fn read<R: Read + ?Sized>(&self, reader: &mut R) -> Result<T> {
        let text = read_all_text(reader)?;
        let mut de = serde_json::Deserializer::from_str(&text);
        let model: T = serde_path_to_error::deserialize(&mut de).map_err(|err| {
            let path = err.path().to_string();
            Error::Validation {
                path,
                message: err.into_inner().to_string(),
            }
        })?;
        de.end().map_err(|err| Error::validation(".", err.to_string()))?;
        model.validate()?;
        Ok(model)
    }
}

impl<T: Model> Default for ModelReader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ModelReader<T> {
    fn clone(&self) -> Self {
        Self {
            _model: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for ModelReader<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelReader")
            .field("model", &std::any::type_name::<T>())
            .finish()
    }
}

/// Build a reader for `T`, ready to register as an input callback.
pub fn model_reader<T: Model>() -> ModelReader<T> {
    ModelReader::new()
}

/// Parse the whole stream into a string-keyed mapping, keeping key order.
pub fn read_json_mapping<R: Read + ?Sized>(reader: &mut R) -> Result<IndexMap<String, Value>> {
    let text = read_all_text(reader)?;
    Ok(serde_json::from_str(&text)?)
}
